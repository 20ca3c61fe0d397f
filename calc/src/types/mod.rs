//! Domain types: elemental types, the type chart and species typing

mod pokemon_type;
mod typing;

pub use pokemon_type::{CHART_MULTIPLIERS, TYPE_CHART, Type};
pub use typing::Typing;
