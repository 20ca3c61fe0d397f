use rand::Rng;

use super::config::DamageConfig;
use crate::error::CalcError;

/// Draw a random factor uniformly from the configured range.
///
/// The engine never touches a global RNG; stochastic callers pass their
/// own source here and hand the result to
/// [`calculate_damage`](super::calculate_damage). The config is validated
/// first, so a non-finite or inverted range is an error rather than a
/// sampler panic.
pub fn roll_random_factor<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DamageConfig,
) -> Result<f32, CalcError> {
    config.validate()?;
    if config.random_min == config.random_max {
        return Ok(config.random_max);
    }
    Ok(rng.gen_range(config.random_min..=config.random_max))
}
