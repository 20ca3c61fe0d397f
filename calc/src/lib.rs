//! Type chart, damage formula and team coverage analysis.
//!
//! # Overview
//!
//! `dexlab-calc` turns plain dataset rows from `dexlab-records` into
//! strongly typed queries and answers them with pure functions:
//!
//! ```text
//! dexlab-records (species/move rows)
//!        │
//!        ▼
//! dexlab-calc (type chart + damage + coverage) ← THIS CRATE
//!        │
//!        └─> dexlab-cli (command-line front end)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 elemental types with the effectiveness chart
//! - [`Typing`] - a species' primary and optional secondary type
//! - [`DamageQuery`] / [`DamageConfig`] - inputs and rule constants for
//!   [`calculate_damage`]
//! - [`TeamMember`] / [`TeamCoverage`] - input and output of
//!   [`analyze_team_coverage`]
//!
//! Everything here is stateless. [`TYPE_CHART`] is a `static`, so lookups
//! and analyses can run from any number of threads without coordination.
//!
//! # Example Usage
//!
//! ```
//! use dexlab_calc::{
//!     analyze_team_coverage, calculate_damage, DamageConfig, DamageQuery, TeamMember, Type,
//! };
//!
//! assert_eq!(Type::Fire.effectiveness(Type::Grass), 2.0);
//!
//! let query = DamageQuery::new(100, 300, 200, 100)
//!     .with_stab(true)
//!     .with_effectiveness(2.0);
//! let damage = calculate_damage(&query, &DamageConfig::default(), None).unwrap();
//! assert_eq!(damage, 384.0);
//!
//! let team = vec![
//!     TeamMember::parse("Garchomp", "Dragon", Some("Ground")).unwrap(),
//!     TeamMember::parse("Corviknight", "Flying", Some("Steel")).unwrap(),
//! ];
//! let coverage = analyze_team_coverage(&team).unwrap();
//! assert_eq!(coverage.weakness_count(Type::Ice), 1);
//! ```

pub mod coverage;
pub mod damage;
mod error;
pub mod query;
pub mod types;

pub use coverage::{
    MAX_ROSTER_SIZE, TeamCoverage, TeamMember, analyze_many, analyze_team_coverage, best_roster,
};
pub use damage::{
    CANONICAL_EFFECTIVENESS, DamageConfig, DamageQuery, calculate_damage,
    calculate_damage_with_rng, damage_range, is_stab, roll_random_factor,
};
pub use error::CalcError;
pub use query::{combined_effectiveness, effectiveness};
pub use types::{CHART_MULTIPLIERS, TYPE_CHART, Type, Typing};
