pub mod coverage;
pub mod damage;
pub mod effectiveness;

use anyhow::{Context, Result};
use dexlab_calc::Typing;

/// Parse a typing written as `Primary` or `Primary/Secondary`
pub fn parse_typing(raw: &str) -> Result<Typing> {
    let mut parts = raw.splitn(2, '/');
    let primary = parts.next().unwrap_or_default();
    let secondary = parts.next();
    Typing::parse(primary, secondary).with_context(|| format!("Invalid typing {:?}", raw))
}
