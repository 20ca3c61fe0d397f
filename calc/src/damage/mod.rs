//! Damage formula
//!
//! ```text
//! base   = ((2 * level / 5 + 2) * power * attack / defense) / 50 + 2
//! damage = base * stab * type_effectiveness * critical * random_factor
//! ```
//!
//! Inputs are already-resolved effective stats; stat stages, abilities and
//! items are the caller's business. The result is left unrounded so that
//! callers apply their own floor/round policy once.

mod config;
mod roll;

pub use config::DamageConfig;
pub use roll::roll_random_factor;

use dexlab_records::{MoveCategory, MoveRecord, SpeciesRecord};
use rand::Rng;

use crate::error::CalcError;
use crate::types::{Type, Typing};

/// Combined multipliers the formula accepts for `type_effectiveness`
pub const CANONICAL_EFFECTIVENESS: [f32; 6] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];

/// Inputs for a single damage calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageQuery {
    /// Attacker level (1-100)
    pub level: u8,
    /// Attacker's effective attacking stat
    pub attack: u32,
    /// Defender's effective defending stat
    pub defense: u32,
    /// Move base power; 0 for status moves
    pub power: u32,
    /// Move type matches one of the attacker's types
    pub stab: bool,
    /// Combined multiplier of the move type against the defender
    pub type_effectiveness: f32,
    pub critical: bool,
}

impl DamageQuery {
    /// Neutral, non-STAB, non-critical query
    pub fn new(level: u8, attack: u32, defense: u32, power: u32) -> Self {
        Self {
            level,
            attack,
            defense,
            power,
            stab: false,
            type_effectiveness: 1.0,
            critical: false,
        }
    }

    /// Build a query for a move of `move_type`, deriving STAB from the
    /// attacker's typing and effectiveness from the defender's.
    pub fn for_move(
        level: u8,
        attack: u32,
        defense: u32,
        power: u32,
        move_type: Type,
        attacker: &Typing,
        defender: &Typing,
    ) -> Self {
        Self {
            stab: is_stab(move_type, attacker),
            type_effectiveness: defender.damage_from(move_type),
            ..Self::new(level, attack, defense, power)
        }
    }

    /// Build a query straight from dataset rows.
    ///
    /// Physical moves pair the attacker's Attack with the defender's
    /// Defense, special moves use the Sp. Atk / Sp. Def pair. Status moves
    /// get power 0. Fails with `InvalidType` when the move or either
    /// species names an unknown type.
    pub fn from_records(
        level: u8,
        attacker: &SpeciesRecord,
        defender: &SpeciesRecord,
        mv: &MoveRecord,
    ) -> Result<Self, CalcError> {
        let move_type: Type = mv.move_type.parse()?;
        let attacker_typing = Typing::try_from(attacker)?;
        let defender_typing = Typing::try_from(defender)?;

        let (attack, defense) = match mv.category {
            MoveCategory::Special => (attacker.stats.sp_attack, defender.stats.sp_defense),
            MoveCategory::Physical | MoveCategory::Status => {
                (attacker.stats.attack, defender.stats.defense)
            }
        };

        Ok(Self::for_move(
            level,
            u32::from(attack),
            u32::from(defense),
            mv.power_or_zero(),
            move_type,
            &attacker_typing,
            &defender_typing,
        ))
    }

    pub fn with_stab(mut self, stab: bool) -> Self {
        self.stab = stab;
        self
    }

    pub fn with_effectiveness(mut self, type_effectiveness: f32) -> Self {
        self.type_effectiveness = type_effectiveness;
        self
    }

    pub fn with_critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    fn validate(&self) -> Result<(), CalcError> {
        if !(1..=100).contains(&self.level) {
            return Err(CalcError::InvalidInput(format!(
                "level {} outside 1-100",
                self.level
            )));
        }
        if self.attack == 0 {
            return Err(CalcError::InvalidInput("attack must be positive".to_string()));
        }
        if self.defense == 0 {
            return Err(CalcError::InvalidInput("defense must be positive".to_string()));
        }
        if !CANONICAL_EFFECTIVENESS.contains(&self.type_effectiveness) {
            return Err(CalcError::InvalidInput(format!(
                "type effectiveness {} is not one of 0, 0.25, 0.5, 1, 2, 4",
                self.type_effectiveness
            )));
        }
        Ok(())
    }

    /// Damage before STAB, effectiveness, critical and random factor
    fn base_damage(&self) -> f32 {
        let level_factor = 2.0 * self.level as f32 / 5.0 + 2.0;
        (level_factor * self.power as f32 * self.attack as f32 / self.defense as f32) / 50.0 + 2.0
    }
}

/// A move gets STAB when its type is one of the attacker's own types
pub fn is_stab(move_type: Type, attacker: &Typing) -> bool {
    attacker.has_type(move_type)
}

/// Compute the damage of one hit.
///
/// `random_factor` is 1.0 when `None`, whatever the configured range.
/// Stochastic callers draw it with [`roll_random_factor`] or use
/// [`calculate_damage_with_rng`].
pub fn calculate_damage(
    query: &DamageQuery,
    config: &DamageConfig,
    random_factor: Option<f32>,
) -> Result<f32, CalcError> {
    config.validate()?;
    query.validate()?;

    // Only a supplied factor is held to the configured range; `None` is the
    // fixed 1.0 of deterministic callers
    let random_factor = match random_factor {
        Some(factor)
            if !factor.is_finite() || factor < config.random_min || factor > config.random_max =>
        {
            return Err(CalcError::InvalidInput(format!(
                "random factor {} outside [{}, {}]",
                factor, config.random_min, config.random_max
            )));
        }
        Some(factor) => factor,
        None => 1.0,
    };

    // Status moves deal nothing; the +2 in the base term must not leak through
    if query.power == 0 {
        return Ok(0.0);
    }

    let stab = if query.stab { config.stab_multiplier } else { 1.0 };
    let critical = if query.critical {
        config.critical_multiplier
    } else {
        1.0
    };

    let damage = query.base_damage() * stab * query.type_effectiveness * critical * random_factor;

    tracing::trace!(
        level = query.level,
        power = query.power,
        effectiveness = query.type_effectiveness,
        random_factor,
        damage,
        "calculated damage"
    );

    Ok(damage)
}

/// Compute damage with a random factor drawn from `rng`
pub fn calculate_damage_with_rng<R: Rng + ?Sized>(
    query: &DamageQuery,
    config: &DamageConfig,
    rng: &mut R,
) -> Result<f32, CalcError> {
    let random_factor = roll_random_factor(rng, config)?;
    calculate_damage(query, config, Some(random_factor))
}

/// Lowest and highest damage across the configured random range
pub fn damage_range(query: &DamageQuery, config: &DamageConfig) -> Result<(f32, f32), CalcError> {
    let min = calculate_damage(query, config, Some(config.random_min))?;
    let max = calculate_damage(query, config, Some(config.random_max))?;
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn reference_query() -> DamageQuery {
        DamageQuery::new(100, 300, 200, 100)
            .with_stab(true)
            .with_effectiveness(2.0)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_reference_damage() {
        // ((42 * 100 * 300 / 200) / 50 + 2) = 128; * 1.5 STAB * 2.0 = 384
        let damage = calculate_damage(&reference_query(), &DamageConfig::default(), None).unwrap();
        assert_eq!(damage, 384.0);
    }

    #[test]
    fn test_damage_is_deterministic() {
        let config = DamageConfig::default();
        let first = calculate_damage(&reference_query(), &config, Some(0.9)).unwrap();
        let second = calculate_damage(&reference_query(), &config, Some(0.9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrounded_result() {
        // 22 * 90 * 100 / 100 / 50 + 2 = 41.6
        let query = DamageQuery::new(50, 100, 100, 90);
        let damage = calculate_damage(&query, &DamageConfig::default(), None).unwrap();
        assert!(approx(damage, 41.6), "got {}", damage);
    }

    #[test]
    fn test_zero_power_is_zero_damage() {
        let config = DamageConfig::default();
        for level in [1, 50, 100] {
            for effectiveness in CANONICAL_EFFECTIVENESS {
                let query = DamageQuery::new(level, 500, 1, 0)
                    .with_stab(true)
                    .with_critical(true)
                    .with_effectiveness(effectiveness);
                assert_eq!(calculate_damage(&query, &config, Some(0.85)).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_immune_is_zero_damage() {
        let query = reference_query().with_effectiveness(0.0);
        assert_eq!(calculate_damage(&query, &DamageConfig::default(), None).unwrap(), 0.0);
    }

    #[test]
    fn test_critical_uses_config_multiplier() {
        let query = reference_query().with_critical(true);
        let modern = calculate_damage(&query, &DamageConfig::default(), None).unwrap();
        assert_eq!(modern, 576.0);

        let legacy = DamageConfig::for_generation(5).unwrap();
        assert_eq!(calculate_damage(&query, &legacy, None).unwrap(), 768.0);
    }

    #[test]
    fn test_random_factor_scales_damage() {
        let damage =
            calculate_damage(&reference_query(), &DamageConfig::default(), Some(0.85)).unwrap();
        assert!(approx(damage, 326.4), "got {}", damage);
    }

    #[test]
    fn test_random_factor_out_of_range() {
        let config = DamageConfig::default();
        for factor in [0.5, 1.01, f32::NAN] {
            assert!(matches!(
                calculate_damage(&reference_query(), &config, Some(factor)),
                Err(CalcError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_default_factor_ignores_narrow_range() {
        let config = DamageConfig {
            random_min: 0.85,
            random_max: 0.95,
            ..DamageConfig::default()
        };
        let query = DamageQuery::new(100, 300, 200, 100);
        // (42 * 100 * 300 / 200) / 50 + 2 = 128
        assert_eq!(calculate_damage(&query, &config, None).unwrap(), 128.0);
        // An explicit 1.0 is still held to the range
        assert!(matches!(
            calculate_damage(&query, &config, Some(1.0)),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(damage_range(&query, &config).is_ok());
    }

    #[test]
    fn test_rng_with_non_finite_range_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(1);
        for config in [
            DamageConfig {
                random_max: f32::INFINITY,
                ..DamageConfig::default()
            },
            DamageConfig {
                random_min: f32::NAN,
                ..DamageConfig::default()
            },
        ] {
            assert!(matches!(
                calculate_damage_with_rng(&reference_query(), &config, &mut rng),
                Err(CalcError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_invalid_level() {
        let config = DamageConfig::default();
        for level in [0, 101, 255] {
            let query = DamageQuery::new(level, 100, 100, 50);
            assert!(matches!(
                calculate_damage(&query, &config, None),
                Err(CalcError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_non_positive_stats() {
        let config = DamageConfig::default();
        assert!(calculate_damage(&DamageQuery::new(50, 0, 100, 50), &config, None).is_err());
        assert!(calculate_damage(&DamageQuery::new(50, 100, 0, 50), &config, None).is_err());
    }

    #[test]
    fn test_non_canonical_effectiveness() {
        let config = DamageConfig::default();
        for effectiveness in [1.5, 3.0, 8.0, -1.0] {
            let query = reference_query().with_effectiveness(effectiveness);
            assert!(matches!(
                calculate_damage(&query, &config, None),
                Err(CalcError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_damage_range() {
        let (min, max) = damage_range(&reference_query(), &DamageConfig::default()).unwrap();
        assert!(approx(min, 326.4));
        assert_eq!(max, 384.0);
    }

    #[test]
    fn test_damage_with_rng_within_range() {
        let config = DamageConfig::default();
        let mut rng = SmallRng::seed_from_u64(2024);
        let (min, max) = damage_range(&reference_query(), &config).unwrap();
        for _ in 0..100 {
            let damage = calculate_damage_with_rng(&reference_query(), &config, &mut rng).unwrap();
            assert!(damage >= min && damage <= max);
        }
    }

    #[test]
    fn test_for_move_derives_stab_and_effectiveness() {
        let charizard = Typing::dual(Type::Fire, Type::Flying).unwrap();
        let ferrothorn = Typing::dual(Type::Grass, Type::Steel).unwrap();

        let query = DamageQuery::for_move(100, 300, 200, 100, Type::Fire, &charizard, &ferrothorn);
        assert!(query.stab);
        assert_eq!(query.type_effectiveness, 4.0);

        let query = DamageQuery::for_move(100, 300, 200, 100, Type::Rock, &charizard, &ferrothorn);
        assert!(!query.stab);
        assert_eq!(query.type_effectiveness, 0.5);
    }

    fn species(name: &str, type1: &str, type2: Option<&str>) -> SpeciesRecord {
        let record = SpeciesRecord::new(1, name, type1).with_stats(dexlab_records::BaseStats {
            hp: 80,
            attack: 120,
            defense: 90,
            sp_attack: 150,
            sp_defense: 60,
            speed: 100,
        });
        match type2 {
            Some(type2) => record.with_secondary(type2),
            None => record,
        }
    }

    #[test]
    fn test_from_records_physical_move() {
        let attacker = species("Charizard", "Fire", Some("Flying"));
        let defender = species("Ferrothorn", "Grass", Some("Steel"));
        let flare_blitz = MoveRecord::new("Flare Blitz", "Fire", Some(120), MoveCategory::Physical);

        let query = DamageQuery::from_records(50, &attacker, &defender, &flare_blitz).unwrap();
        assert_eq!(query.attack, 120);
        assert_eq!(query.defense, 90);
        assert_eq!(query.power, 120);
        assert!(query.stab);
        assert_eq!(query.type_effectiveness, 4.0);
    }

    #[test]
    fn test_from_records_special_move_uses_special_stats() {
        let attacker = species("Starmie", "Water", Some("Psychic"));
        let defender = species("Golem", "Rock", Some("Ground"));
        let surf = MoveRecord::new("Surf", "water", Some(90), MoveCategory::Special);

        let query = DamageQuery::from_records(50, &attacker, &defender, &surf).unwrap();
        assert_eq!(query.attack, 150);
        assert_eq!(query.defense, 60);
        assert!(query.stab);
        assert_eq!(query.type_effectiveness, 4.0);
    }

    #[test]
    fn test_from_records_status_move_deals_nothing() {
        let attacker = species("Gengar", "Ghost", Some("Poison"));
        let defender = species("Snorlax", "Normal", None);
        let toxic = MoveRecord::new("Toxic", "Poison", Some(10), MoveCategory::Status);

        let query = DamageQuery::from_records(50, &attacker, &defender, &toxic).unwrap();
        assert_eq!(query.power, 0);
        assert_eq!(
            calculate_damage(&query, &DamageConfig::default(), None).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_from_records_unknown_move_type() {
        let attacker = species("Mew", "Psychic", None);
        let shadow_rush = MoveRecord::new("Shadow Rush", "Shadow", Some(90), MoveCategory::Physical);
        assert_eq!(
            DamageQuery::from_records(50, &attacker, &attacker, &shadow_rush).unwrap_err(),
            CalcError::InvalidType("Shadow".to_string())
        );
    }

    #[test]
    fn test_is_stab() {
        let pikachu = Typing::mono(Type::Electric);
        assert!(is_stab(Type::Electric, &pikachu));
        assert!(!is_stab(Type::Normal, &pikachu));
    }
}
