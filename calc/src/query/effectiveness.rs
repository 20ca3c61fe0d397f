//! Type chart lookups keyed by type name
//!
//! These are the entry points for callers holding raw type names (dataset
//! rows, command-line arguments). Unknown names fail with
//! [`CalcError::InvalidType`] instead of defaulting to neutral.

use crate::error::CalcError;
use crate::types::Type;

/// Multiplier when `attacking` hits a single `defending` type
pub fn effectiveness(attacking: &str, defending: &str) -> Result<f32, CalcError> {
    let attacking: Type = attacking.parse()?;
    let defending: Type = defending.parse()?;
    Ok(attacking.effectiveness(defending))
}

/// Multiplier when `attacking` hits a defender with one or two types
pub fn combined_effectiveness(
    attacking: &str,
    defending_primary: &str,
    defending_secondary: Option<&str>,
) -> Result<f32, CalcError> {
    let attacking: Type = attacking.parse()?;
    let primary: Type = defending_primary.parse()?;
    let secondary = defending_secondary
        .map(str::parse::<Type>)
        .transpose()?;
    Ok(attacking.combined_effectiveness(primary, secondary))
}
