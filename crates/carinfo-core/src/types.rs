//! Domain types returned to callers.
//!
//! Field names serialize in camelCase; that JSON shape is the contract seen
//! by every consumer of a search result.

use serde::{Deserialize, Serialize};

/// A validated automotive profile.
///
/// - `image_url`: optional; omitted from JSON when absent
/// - `achievements`/`key_milestones`/`innovation_awards`: presentation order
/// - `specs`/`pricing`: free text, values carry units and currency symbols
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    pub name: String,
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub history: String,
    pub achievements: Vec<String>,
    pub key_milestones: Vec<String>,
    pub innovation_awards: Vec<String>,
    pub specs: CarSpecs,
    pub pricing: CarPricing,
    pub manufacturing: CarManufacturing,
    pub competitors: Vec<Competitor>,
    pub ratings: CarRatings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSpecs {
    pub engine: String,
    pub power: String,
    pub torque: String,
    pub top_speed: String,
    pub acceleration: String,
    pub drive: String,
    pub range: String,
    pub consumption: String,
    pub emissions: String,
    pub charging: String,
    pub battery: String,
}

/// Price text per market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPricing {
    pub usa: String,
    pub china: String,
    pub india: String,
    pub dubai: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarManufacturing {
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip_partner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_partner: Option<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub price: String,
}

/// Scores as produced by the generator. `overall` is conventionally out of
/// 5 and the rest out of 10; neither range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarRatings {
    pub overall: f64,
    pub performance: f64,
    pub technology: f64,
    pub value: f64,
}

/// Where a search result came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordSource {
    Cached,
    Generated,
    Fallback,
}

/// The record returned by a search plus its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub record: CarRecord,
    pub source: RecordSource,
}
