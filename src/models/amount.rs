//! Raw amount handling
//!
//! Budget fields are kept as the raw strings the user typed and only coerced
//! to numbers when aggregates are computed. Blank or unparseable input always
//! coerces to zero, never to an error.

use serde::{Deserialize, Deserializer};

/// Coerce a raw budget string to a number, treating blank or unparseable
/// input as zero. Non-finite values also coerce to zero: a single NaN would
/// otherwise poison every sum it enters.
pub fn coerce(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a required amount field. Returns `None` when the field is blank,
/// not a number, or not finite.
pub fn parse_strict(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Deserialize a budget field that older blobs may store as either a JSON
/// string or a JSON number, normalizing to the raw-string representation.
pub fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", n as i64)
            } else {
                n.to_string()
            }
        }
    })
}
