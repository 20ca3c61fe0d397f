//! Query helpers over the type chart
//!
//! Name-keyed effectiveness lookups for callers holding raw strings, and
//! defensive matchup helpers for a single typing.

mod effectiveness;
mod matchup;

pub use effectiveness::{combined_effectiveness, effectiveness};
pub use matchup::{
    Matchup,
    defensive_profile,
    immunities,
    is_immune_to,
    is_weak_to_any,
    resistances,
    resists_all,
    weaknesses,
};
