//! Forgiving deserializers for fields the Remote Store does not type strictly.
//!
//! Records created from HTML forms may come back with numbers stored as
//! strings, so numeric fields accept either representation.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(u64),
    Float(f64),
    Text(String),
}

/// A non-negative whole number, given as a JSON number or numeric string.
pub fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Int(n) => {
            u32::try_from(n).map_err(|_| de::Error::custom(format!("number out of range: {}", n)))
        }
        NumberOrText::Float(f) if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => {
            Ok(f as u32)
        }
        NumberOrText::Float(f) => Err(de::Error::custom(format!(
            "expected a non-negative whole number, got {}",
            f
        ))),
        NumberOrText::Text(s) => s.trim().parse::<u32>().map_err(|_| {
            de::Error::custom(format!("expected a non-negative whole number, got {:?}", s))
        }),
    }
}

/// An optional float. Null, blank or unparseable values become `None`.
pub fn optional_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => None,
        Some(NumberOrText::Int(n)) => Some(n as f64),
        Some(NumberOrText::Float(f)) => Some(f),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok(),
    })
}

/// Text that falls back to "Unknown" when null, missing or blank.
pub fn text_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(super::or_unknown(value.as_deref()))
}

pub fn unknown() -> String {
    super::UNKNOWN.to_string()
}
