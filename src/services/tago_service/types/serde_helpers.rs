use std::str::FromStr;

use serde::de::{Deserializer, Error};
use serde::Deserialize;

/// TAGO sends scalars as JSON numbers or strings depending on the field and
/// the `_type` requested. XML payloads only ever contain strings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MaybeStringWrapped {
    Num(serde_json::Number),
    Str(String),
}

impl MaybeStringWrapped {
    pub fn into_text(self) -> String {
        match self {
            MaybeStringWrapped::Num(n) => n.to_string(),
            MaybeStringWrapped::Str(s) => s,
        }
    }

    pub fn parse<T: FromStr>(&self) -> Option<T> {
        match self {
            MaybeStringWrapped::Num(n) => n.to_string().parse().ok(),
            MaybeStringWrapped::Str(s) => s.trim().parse().ok(),
        }
    }
}

pub fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = MaybeStringWrapped::deserialize(deserializer)?;
    raw.parse::<f64>()
        .ok_or_else(|| Error::custom(format!("Invalid number: {}", raw.into_text())))
}

pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(MaybeStringWrapped::deserialize(deserializer)?.into_text())
}

pub fn deserialize_option_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<MaybeStringWrapped> = Deserialize::deserialize(deserializer)?;
    Ok(raw.map(MaybeStringWrapped::into_text))
}

/// Blank strings (empty XML elements) count as absent.
pub fn deserialize_option_integer<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<MaybeStringWrapped> = Deserialize::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(MaybeStringWrapped::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(Some)
            .ok_or_else(|| Error::custom(format!("Invalid integer: {}", raw.into_text()))),
    }
}
