//! Species typing (one primary type, optional secondary)

use dexlab_records::SpeciesRecord;

use super::pokemon_type::Type;
use crate::error::CalcError;

/// The one or two elemental types a species carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Typing {
    primary: Type,
    secondary: Option<Type>,
}

impl Typing {
    /// Single-typed species
    pub fn mono(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Dual-typed species. A secondary equal to the primary is rejected.
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, CalcError> {
        Self::new(primary, Some(secondary))
    }

    /// Fails with `InvalidInput` when `secondary` repeats `primary`
    pub fn new(primary: Type, secondary: Option<Type>) -> Result<Self, CalcError> {
        if secondary == Some(primary) {
            return Err(CalcError::InvalidInput(format!(
                "secondary type duplicates primary type {}",
                primary
            )));
        }
        Ok(Self { primary, secondary })
    }

    /// Parse from type names; fails with `InvalidType` on an unknown name
    pub fn parse(primary: &str, secondary: Option<&str>) -> Result<Self, CalcError> {
        let primary = primary.parse::<Type>()?;
        let secondary = secondary.map(str::parse::<Type>).transpose()?;
        Self::new(primary, secondary)
    }

    pub fn primary(&self) -> Type {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    /// Iterate over the one or two types
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    /// Multiplier this typing takes from an attacking type
    pub fn damage_from(&self, attacking: Type) -> f32 {
        attacking.combined_effectiveness(self.primary, self.secondary)
    }
}

impl From<Type> for Typing {
    fn from(t: Type) -> Self {
        Typing::mono(t)
    }
}

impl TryFrom<&SpeciesRecord> for Typing {
    type Error = CalcError;

    fn try_from(record: &SpeciesRecord) -> Result<Self, Self::Error> {
        Typing::parse(&record.type1, record.type2.as_deref())
    }
}

impl std::fmt::Display for Typing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}
