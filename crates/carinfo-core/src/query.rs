//! Inbound query validation.

use crate::cache::normalize_key;
use crate::error::{Error, Result};

pub const MAX_QUERY_CHARS: usize = 100;

/// A car name accepted for lookup: trimmed, 1..=100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarQuery {
    text: String,
}

impl CarQuery {
    pub fn parse(raw: &str) -> Result<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(Error::InvalidQuery("Car name is required".to_string()));
        }
        let chars = text.chars().count();
        if chars > MAX_QUERY_CHARS {
            return Err(Error::InvalidQuery(format!(
                "Car name too long ({chars} > {MAX_QUERY_CHARS} characters)"
            )));
        }
        Ok(Self { text: text.to_string() })
    }

    /// The query as typed, minus surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cache_key(&self) -> String {
        normalize_key(&self.text)
    }
}

impl std::fmt::Display for CarQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
