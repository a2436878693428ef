//! Raw generator text to validated record.
//!
//! Parse failures and refusals are errors. A value that parses but has the
//! wrong shape is not an error here; it comes back as
//! [`Ingested::ShapeInvalid`] so the caller decides what to substitute.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::{validate, ValidationFailure};
use crate::types::CarRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Ingested {
    Valid(CarRecord),
    ShapeInvalid(ValidationFailure),
}

/// Remove a surrounding markdown code fence (```` ```json ```` or ```` ``` ````).
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// The model's `{"error": ...}` reply for queries it does not recognise
/// as a vehicle. Any truthy `error` value counts: non-empty strings,
/// `true`, non-zero numbers, arrays and objects.
fn refusal(value: &Value) -> Option<String> {
    let flag = value.get("error")?;
    let truthy = match flag {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    if !truthy {
        return None;
    }
    let message = match flag {
        Value::String(s) => s.clone(),
        Value::Object(obj) => match obj.get("message") {
            Some(Value::String(msg)) => msg.clone(),
            _ => flag.to_string(),
        },
        other => other.to_string(),
    };
    Some(message)
}

pub fn ingest(raw: &str) -> Result<Ingested> {
    let body = strip_code_fences(raw);
    let value: Value = serde_json::from_str(body).map_err(|source| Error::MalformedResponse { source })?;
    if let Some(msg) = refusal(&value) {
        return Err(Error::Refused(msg));
    }
    Ok(match validate(&value) {
        Ok(record) => Ingested::Valid(record),
        Err(failure) => Ingested::ShapeInvalid(failure),
    })
}
