//! Team coverage analysis
//!
//! For a roster of 1-6 members this reports which attacking types the team
//! can threaten (`covered_types`) and, per attacking type, how many members
//! take more than neutral damage from it (`weaknesses`).
//!
//! An attacking type `T` counts as covered when some member carries a type
//! `m` with `m == T` or where `m` hits `T` super effectively. This is a
//! typing-only heuristic; it knows nothing about movepools.

mod batch;

pub use batch::{analyze_many, best_roster};

use std::collections::{BTreeMap, BTreeSet};

use dexlab_records::SpeciesRecord;

use crate::error::CalcError;
use crate::query::{Matchup, defensive_profile};
use crate::types::{Type, Typing};

/// Largest roster a team may field
pub const MAX_ROSTER_SIZE: usize = 6;

/// A named roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TeamMember {
    pub name: String,
    pub typing: Typing,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, typing: Typing) -> Self {
        Self {
            name: name.into(),
            typing,
        }
    }

    /// Build from type names; fails with `InvalidType` on an unknown name
    pub fn parse(
        name: impl Into<String>,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<Self, CalcError> {
        Ok(Self::new(name, Typing::parse(primary, secondary)?))
    }

    pub fn from_record(record: &SpeciesRecord) -> Result<Self, CalcError> {
        Ok(Self::new(record.name.clone(), Typing::try_from(record)?))
    }

    /// Whether this member's own typing threatens `target` offensively
    pub fn threatens(&self, target: Type) -> bool {
        self.typing
            .types()
            .any(|own| own == target || own.effectiveness(target) > 1.0)
    }
}

/// Result of [`analyze_team_coverage`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TeamCoverage {
    /// Attacking types the roster can threaten
    pub covered_types: BTreeSet<Type>,
    /// Members taking >1x from each attacking type (all 18 keys present)
    pub weaknesses: BTreeMap<Type, usize>,
    /// Members taking 0 < x < 1 from each attacking type
    pub resistances: BTreeMap<Type, usize>,
    /// Members taking 0x from each attacking type
    pub immunities: BTreeMap<Type, usize>,
}

impl TeamCoverage {
    fn empty() -> Self {
        let zeroed = || Type::ALL.iter().map(|t| (*t, 0)).collect::<BTreeMap<_, _>>();
        Self {
            covered_types: BTreeSet::new(),
            weaknesses: zeroed(),
            resistances: zeroed(),
            immunities: zeroed(),
        }
    }

    /// Attacking types no member threatens
    pub fn uncovered_types(&self) -> Vec<Type> {
        Type::ALL
            .iter()
            .copied()
            .filter(|t| !self.covered_types.contains(t))
            .collect()
    }

    pub fn weakness_count(&self, attacking: Type) -> usize {
        self.weaknesses.get(&attacking).copied().unwrap_or(0)
    }

    /// Sum of weakness counts over all attacking types
    pub fn total_weaknesses(&self) -> usize {
        self.weaknesses.values().sum()
    }

    /// Attacking types that at least `min_members` members are weak to
    pub fn shared_weaknesses(&self, min_members: usize) -> Vec<Type> {
        self.weaknesses
            .iter()
            .filter(|&(_, &count)| count >= min_members)
            .map(|(t, _)| *t)
            .collect()
    }

    /// Attacking types with more weak members than resistant or immune ones
    pub fn unanswered_weaknesses(&self) -> Vec<Type> {
        Type::ALL
            .iter()
            .copied()
            .filter(|t| {
                let answered = self.resistances[t] + self.immunities[t];
                self.weaknesses[t] > answered
            })
            .collect()
    }
}

/// Analyze offensive coverage and defensive liabilities of a roster
pub fn analyze_team_coverage(roster: &[TeamMember]) -> Result<TeamCoverage, CalcError> {
    if roster.is_empty() {
        return Err(CalcError::EmptyRoster);
    }
    if roster.len() > MAX_ROSTER_SIZE {
        return Err(CalcError::InvalidInput(format!(
            "roster has {} members, at most {} allowed",
            roster.len(),
            MAX_ROSTER_SIZE
        )));
    }

    let mut coverage = TeamCoverage::empty();

    for member in roster {
        for (attacking, matchup) in defensive_profile(&member.typing) {
            let bucket = match matchup {
                Matchup::Weak => &mut coverage.weaknesses,
                Matchup::Resists => &mut coverage.resistances,
                Matchup::Immune => &mut coverage.immunities,
                Matchup::Neutral => continue,
            };
            *bucket.entry(attacking).or_insert(0) += 1;
        }
        coverage
            .covered_types
            .extend(Type::ALL.iter().copied().filter(|t| member.threatens(*t)));
    }

    tracing::debug!(
        members = roster.len(),
        covered = coverage.covered_types.len(),
        total_weaknesses = coverage.total_weaknesses(),
        "analyzed team coverage"
    );

    Ok(coverage)
}
