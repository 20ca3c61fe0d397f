//! Plain data records for the Pokemon reference dataset.
//!
//! Species and move rows arrive from the data pipeline as JSON arrays. This
//! crate types them, normalizes sentinel values into real optionals, and
//! provides the small curation passes (deduplication, merging, regional
//! tagging) that run before the rows reach `dexlab-calc`.

use thiserror::Error;

pub mod curation;
pub mod moves;
pub mod region;
pub mod species;

pub use curation::{dedupe_species, merge_species, tag_regions};
pub use moves::{MoveCategory, MoveRecord, parse_move_table};
pub use region::Region;
pub use species::{BaseStats, SpeciesRecord, parse_species_table};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },
}

/// Collapse the sentinel spellings the upstream tables use for "no value"
/// into `None`.
pub fn normalize_optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "none" | "null" | "nan" | "-" => None,
        _ => Some(trimmed.to_string()),
    }
}

pub(crate) fn deserialize_optional_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(normalize_optional))
}

/// Base power as the tables write it: a number, `null`, a sentinel string
/// such as `"-"` or `"NaN"`, or a number in quotes.
pub(crate) fn deserialize_optional_power<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPower {
        Number(u32),
        Text(String),
    }

    match Option::<RawPower>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPower::Number(power)) => Ok(Some(power)),
        Some(RawPower::Text(text)) => match normalize_optional(&text) {
            None => Ok(None),
            Some(value) => value
                .parse::<u32>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid power {:?}", value))),
        },
    }
}
