//! Defensive matchup helpers over a species typing

use crate::types::{Type, Typing};

/// How a typing fares against one attacking type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Matchup {
    Immune,
    Resists,
    Neutral,
    Weak,
}

impl Matchup {
    pub fn classify(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Matchup::Immune
        } else if multiplier < 1.0 {
            Matchup::Resists
        } else if multiplier > 1.0 {
            Matchup::Weak
        } else {
            Matchup::Neutral
        }
    }
}

/// Classify every attacking type against `defender`, in chart order
pub fn defensive_profile(defender: &Typing) -> [(Type, Matchup); 18] {
    Type::ALL.map(|t| (t, Matchup::classify(defender.damage_from(t))))
}

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(defender: &Typing, attacking_types: &[Type]) -> bool {
    attacking_types
        .iter()
        .any(|t| defender.damage_from(*t) > 1.0)
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(defender: &Typing, attacking_types: &[Type]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types
        .iter()
        .all(|t| defender.damage_from(*t) < 1.0)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(defender: &Typing, attacking_type: Type) -> bool {
    defender.damage_from(attacking_type) == 0.0
}

fn types_where(defender: &Typing, matchup: Matchup) -> Vec<Type> {
    defensive_profile(defender)
        .into_iter()
        .filter(|(_, m)| *m == matchup)
        .map(|(t, _)| t)
        .collect()
}

/// Get all types that are super effective against the defender
pub fn weaknesses(defender: &Typing) -> Vec<Type> {
    types_where(defender, Matchup::Weak)
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(defender: &Typing) -> Vec<Type> {
    types_where(defender, Matchup::Resists)
}

/// Get all types that the defender is immune to
pub fn immunities(defender: &Typing) -> Vec<Type> {
    types_where(defender, Matchup::Immune)
}
