//! Species rows
//!
//! These types represent one row of the species/base-stat table.

use serde::{Deserialize, Serialize};

use crate::RecordError;

/// The six base stats of a species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    #[serde(alias = "sp_atk", alias = "spa")]
    pub sp_attack: u16,
    #[serde(alias = "sp_def", alias = "spd")]
    pub sp_defense: u16,
    #[serde(alias = "spe")]
    pub speed: u16,
}

impl BaseStats {
    /// Sum of all six stats
    pub fn total(&self) -> u32 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
        .iter()
        .map(|&s| s as u32)
        .sum()
    }
}

/// A species entry from the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// National dex number
    #[serde(alias = "pokedex_number", alias = "id")]
    pub dex: u16,

    /// Species name (including forme, e.g. "Ninetales-Alola")
    pub name: String,

    /// Primary type name
    #[serde(alias = "type_1", alias = "primary_type")]
    pub type1: String,

    /// Secondary type name, absent for single-typed species
    #[serde(
        default,
        alias = "type_2",
        alias = "secondary_type",
        deserialize_with = "crate::deserialize_optional_name"
    )]
    pub type2: Option<String>,

    #[serde(flatten)]
    pub stats: BaseStats,
}

impl SpeciesRecord {
    pub fn new(dex: u16, name: impl Into<String>, type1: impl Into<String>) -> Self {
        Self {
            dex,
            name: name.into(),
            type1: type1.into(),
            type2: None,
            stats: BaseStats::default(),
        }
    }

    pub fn with_secondary(mut self, type2: impl Into<String>) -> Self {
        self.type2 = Some(type2.into());
        self
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    /// Key used to detect repeated rows: dex number plus lowercased name
    pub fn key(&self) -> (u16, String) {
        (self.dex, self.name.trim().to_lowercase())
    }

    fn check(&self, row: usize) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::MissingField { row, field: "name" });
        }
        if self.type1.trim().is_empty() {
            return Err(RecordError::MissingField { row, field: "type1" });
        }
        Ok(())
    }
}

/// Parse a JSON array of species rows
pub fn parse_species_table(json: &str) -> Result<Vec<SpeciesRecord>, RecordError> {
    let records: Vec<SpeciesRecord> = serde_json::from_str(json)?;
    for (row, record) in records.iter().enumerate() {
        record.check(row)?;
    }
    Ok(records)
}
