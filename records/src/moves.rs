//! Move rows

use serde::{Deserialize, Serialize};

use crate::{RecordError, deserialize_optional_power};

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    #[serde(alias = "physical")]
    Physical,
    #[serde(alias = "special")]
    Special,
    #[serde(alias = "status")]
    Status,
}

/// A move entry from the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,

    /// Type name of the move
    #[serde(rename = "type", alias = "move_type")]
    pub move_type: String,

    /// Base power; absent for status moves. Sentinel strings read as `None`.
    #[serde(default, deserialize_with = "deserialize_optional_power")]
    pub power: Option<u32>,

    pub category: MoveCategory,
}

impl MoveRecord {
    pub fn new(
        name: impl Into<String>,
        move_type: impl Into<String>,
        power: Option<u32>,
        category: MoveCategory,
    ) -> Self {
        Self {
            name: name.into(),
            move_type: move_type.into(),
            power,
            category,
        }
    }

    /// Base power, treating a missing value as 0
    pub fn power_or_zero(&self) -> u32 {
        match self.category {
            MoveCategory::Status => 0,
            _ => self.power.unwrap_or(0),
        }
    }

    pub fn is_status(&self) -> bool {
        self.power_or_zero() == 0
    }
}

/// Parse a JSON array of move rows
pub fn parse_move_table(json: &str) -> Result<Vec<MoveRecord>, RecordError> {
    let records: Vec<MoveRecord> = serde_json::from_str(json)?;
    for (row, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(RecordError::MissingField { row, field: "name" });
        }
        if record.move_type.trim().is_empty() {
            return Err(RecordError::MissingField { row, field: "type" });
        }
    }
    Ok(records)
}
