//! Placeholder record used when generated data fails shape validation.

use crate::types::{
    CarManufacturing, CarPricing, CarRatings, CarRecord, CarSpecs, Competitor,
};

pub const DEMO_SUFFIX: &str = " (Demo Data)";

const DEMO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1603584173870-7f23fdae1b7a?w=800&q=80";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Build a schema-valid placeholder for `query`. Deterministic; the only
/// query-dependent fields are `name` and `history`.
pub fn fallback_record(query: &str) -> CarRecord {
    CarRecord {
        name: format!("{query}{DEMO_SUFFIX}"),
        tagline: "AI-generated car information unavailable - showing demo format".to_string(),
        image_url: Some(DEMO_IMAGE_URL.to_string()),
        history: format!(
            "The {query} represents modern automotive engineering. This is a demonstration of \
             the car information format when specific data is not available from our AI service."
        ),
        achievements: strings(&[
            "Award-winning design",
            "Advanced safety features",
            "Environmental certification",
        ]),
        key_milestones: strings(&[
            "2020: Initial concept development",
            "2022: Production launch",
            "2024: Latest generation release",
        ]),
        innovation_awards: strings(&[
            "Best Design Award 2023",
            "Innovation Excellence 2024",
            "Technology Leadership Award",
        ]),
        specs: CarSpecs {
            engine: "Advanced powertrain".to_string(),
            power: "High-performance output".to_string(),
            torque: "Optimal torque delivery".to_string(),
            top_speed: "Impressive top speed".to_string(),
            acceleration: "Quick acceleration".to_string(),
            drive: "All-wheel drive".to_string(),
            range: "Extended range".to_string(),
            consumption: "Efficient consumption".to_string(),
            emissions: "Low emissions".to_string(),
            charging: "Fast charging capability".to_string(),
            battery: "Advanced battery technology".to_string(),
        },
        pricing: CarPricing {
            usa: "$45,000 - $65,000".to_string(),
            china: "¥320,000 - ¥450,000".to_string(),
            india: "₹3,500,000 - ₹5,000,000".to_string(),
            dubai: "AED 165,000 - AED 240,000".to_string(),
        },
        manufacturing: CarManufacturing {
            manufacturer: "Global Automotive".to_string(),
            chip_partner: Some("Advanced Tech Solutions".to_string()),
            battery_partner: Some("Energy Systems Corp".to_string()),
            locations: strings(&["USA", "Germany", "China", "Japan"]),
        },
        competitors: [
            ("Competitor Model A", "$42,000"),
            ("Competitor Model B", "$48,000"),
            ("Competitor Model C", "$52,000"),
            ("Competitor Model D", "$58,000"),
        ]
        .into_iter()
        .map(|(name, price)| Competitor { name: name.to_string(), price: price.to_string() })
        .collect(),
        ratings: CarRatings { overall: 4.2, performance: 8.5, technology: 8.8, value: 7.9 },
    }
}

/// True when `record` was produced by [`fallback_record`].
pub fn is_placeholder(record: &CarRecord) -> bool {
    record.name.ends_with(DEMO_SUFFIX) && record.image_url.as_deref() == Some(DEMO_IMAGE_URL)
}
