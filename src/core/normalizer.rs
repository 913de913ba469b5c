//! Fact normalizer: raw form input to [`BuildingFacts`].
//!
//! Nothing here fails. Input that cannot be used becomes an absent field.

use crate::domain::model::{BuildingFacts, RawFacts};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

pub fn normalize(raw: &RawFacts) -> BuildingFacts {
    let facts = BuildingFacts {
        year: normalize_year(raw.year),
        grade: normalize_text(&raw.grade),
        devices: split_devices(&raw.devices),
        area: normalize_text(&raw.area),
    };

    tracing::debug!(
        "Normalized facts: year={:?}, grade={:?}, devices={}, area={:?}",
        facts.year,
        facts.grade,
        facts.devices.len(),
        facts.area
    );

    facts
}

/// Zero means "no year supplied", not year zero.
pub fn normalize_year(year: Option<i32>) -> Option<i32> {
    year.filter(|y| *y != 0)
}

/// Year typed as text. Empty, unparseable and zero all mean absent.
pub fn parse_year_text(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<i32>() {
        Ok(year) => normalize_year(Some(year)),
        Err(e) => {
            tracing::warn!("Ignoring unparseable year '{}': {}", trimmed, e);
            None
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearInput {
    Number(i64),
    Text(String),
    Other(IgnoredAny),
}

/// Serde hook for a year typed into a config file.
///
/// Accepts an integer or text. Out-of-range numbers, unparseable text and
/// any other value type become `None` instead of failing the whole file.
pub fn deserialize_raw_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = match Option::<YearInput>::deserialize(deserializer)? {
        None => None,
        Some(YearInput::Number(number)) => match i32::try_from(number) {
            Ok(year) => Some(year),
            Err(_) => {
                tracing::warn!("Ignoring out-of-range year {}", number);
                None
            }
        },
        Some(YearInput::Text(text)) => parse_year_text(&text),
        Some(YearInput::Other(_)) => {
            tracing::warn!("Ignoring year that is neither a number nor text");
            None
        }
    };
    Ok(year)
}

pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn split_devices(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
