use crate::error::CalcError;

/// Rule-variant constants for the damage formula
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DamageConfig {
    /// Applied when the query's critical flag is set
    pub critical_multiplier: f32,
    /// Applied when the query's stab flag is set
    pub stab_multiplier: f32,
    /// Lower bound of the random factor
    pub random_min: f32,
    /// Upper bound of the random factor
    pub random_max: f32,
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            critical_multiplier: 1.5,
            stab_multiplier: 1.5,
            random_min: 0.85,
            random_max: 1.0,
        }
    }
}

impl DamageConfig {
    /// Constants for a mainline generation (1-9).
    ///
    /// Critical hits deal 2x through Gen 5 and 1.5x from Gen 6 on.
    pub fn for_generation(generation: u8) -> Result<Self, CalcError> {
        let critical_multiplier = match generation {
            1..=5 => 2.0,
            6..=9 => 1.5,
            _ => {
                return Err(CalcError::InvalidInput(format!(
                    "unknown generation {}",
                    generation
                )));
            }
        };
        Ok(Self {
            critical_multiplier,
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        let finite = [
            self.critical_multiplier,
            self.stab_multiplier,
            self.random_min,
            self.random_max,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(CalcError::InvalidInput(
                "damage config values must be finite".to_string(),
            ));
        }
        if self.critical_multiplier < 1.0 || self.stab_multiplier < 1.0 {
            return Err(CalcError::InvalidInput(format!(
                "critical ({}) and stab ({}) multipliers must be at least 1.0",
                self.critical_multiplier, self.stab_multiplier
            )));
        }
        if self.random_min <= 0.0 || self.random_min > self.random_max {
            return Err(CalcError::InvalidInput(format!(
                "random range [{}, {}] is empty or non-positive",
                self.random_min, self.random_max
            )));
        }
        Ok(())
    }
}
