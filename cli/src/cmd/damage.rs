use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use dexlab_calc::{
    DamageConfig, DamageQuery, Type, Typing, calculate_damage, damage_range, roll_random_factor,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::parse_typing;

#[derive(Args)]
pub struct DamageArgs {
    /// Attacker level (1-100)
    #[arg(long)]
    pub level: u8,

    /// Attacker's effective attacking stat
    #[arg(long)]
    pub attack: u32,

    /// Defender's effective defending stat
    #[arg(long)]
    pub defense: u32,

    /// Move base power (0 for status moves)
    #[arg(long)]
    pub power: u32,

    /// Precomputed type effectiveness (0, 0.25, 0.5, 1, 2 or 4)
    #[arg(long, conflicts_with_all = ["move_type", "defender"])]
    pub effectiveness: Option<f32>,

    /// Move type; with --defender, derives effectiveness (and STAB with --attacker)
    #[arg(long, requires = "defender")]
    pub move_type: Option<String>,

    /// Attacker typing, e.g. "Fire/Flying"
    #[arg(long, requires = "move_type")]
    pub attacker: Option<String>,

    /// Defender typing, e.g. "Grass/Steel"
    #[arg(long, requires = "move_type")]
    pub defender: Option<String>,

    /// Apply same-type attack bonus
    #[arg(long)]
    pub stab: bool,

    /// Critical hit
    #[arg(long)]
    pub critical: bool,

    /// Fixed random factor (defaults to 1.0)
    #[arg(long, conflicts_with = "roll")]
    pub random: Option<f32>,

    /// Draw the random factor instead of using a fixed one
    #[arg(long)]
    pub roll: bool,

    /// Seed for --roll
    #[arg(long, requires = "roll")]
    pub seed: Option<u64>,

    /// Print the min-max damage range instead of a single value
    #[arg(long, conflicts_with_all = ["random", "roll"])]
    pub range: bool,

    /// Rule generation (sets the critical multiplier)
    #[arg(long, conflicts_with = "config")]
    pub generation: Option<u8>,

    /// JSON file with damage rule constants
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn load_config(args: &DamageArgs) -> Result<DamageConfig> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: DamageConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        return Ok(config);
    }
    match args.generation {
        Some(generation) => DamageConfig::for_generation(generation).context("Invalid generation"),
        None => Ok(DamageConfig::default()),
    }
}

fn build_query(args: &DamageArgs) -> Result<DamageQuery> {
    let base = DamageQuery::new(args.level, args.attack, args.defense, args.power)
        .with_critical(args.critical);

    let query = match (&args.move_type, &args.defender, args.effectiveness) {
        (Some(move_type), Some(defender), None) => {
            let move_type: Type = move_type.parse().context("Invalid move type")?;
            let defender = parse_typing(defender)?;
            let attacker = match &args.attacker {
                Some(attacker) => Some(parse_typing(attacker)?),
                None => None,
            };
            let derived = derived_query(&base, move_type, attacker.as_ref(), &defender);
            let stab = derived.stab || args.stab;
            derived.with_stab(stab)
        }
        (None, None, Some(effectiveness)) => base.with_stab(args.stab).with_effectiveness(effectiveness),
        (None, None, None) => base.with_stab(args.stab),
        _ => bail!("Pass either --effectiveness or --move-type with --defender"),
    };
    Ok(query)
}

fn derived_query(
    base: &DamageQuery,
    move_type: Type,
    attacker: Option<&Typing>,
    defender: &Typing,
) -> DamageQuery {
    match attacker {
        Some(attacker) => DamageQuery::for_move(
            base.level,
            base.attack,
            base.defense,
            base.power,
            move_type,
            attacker,
            defender,
        )
        .with_critical(base.critical),
        None => base.clone().with_effectiveness(defender.damage_from(move_type)),
    }
}

pub fn execute(args: DamageArgs) -> Result<()> {
    let config = load_config(&args)?;
    let query = build_query(&args)?;
    tracing::debug!(?query, ?config, "running damage calculation");

    if args.range {
        let (min, max) = damage_range(&query, &config).context("Damage calculation failed")?;
        println!("{} - {}", min, max);
        return Ok(());
    }

    let random_factor = if args.roll {
        let mut rng = match args.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Some(roll_random_factor(&mut rng, &config).context("Invalid damage config")?)
    } else {
        args.random
    };

    let damage =
        calculate_damage(&query, &config, random_factor).context("Damage calculation failed")?;
    println!("{}", damage);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: DamageArgs,
    }

    fn parse(argv: &[&str]) -> DamageArgs {
        let mut full = vec!["dexlab-damage"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    const STATS: [&str; 8] = [
        "--level", "100", "--attack", "300", "--defense", "200", "--power", "100",
    ];

    #[test]
    fn test_query_with_explicit_effectiveness() {
        let mut argv = STATS.to_vec();
        argv.extend(["--effectiveness", "2", "--stab"]);
        let query = build_query(&parse(&argv)).unwrap();

        assert!(query.stab);
        assert_eq!(query.type_effectiveness, 2.0);
        assert_eq!(
            calculate_damage(&query, &DamageConfig::default(), None).unwrap(),
            384.0
        );
    }

    #[test]
    fn test_query_derived_from_typings() {
        let mut argv = STATS.to_vec();
        argv.extend([
            "--move-type", "Fire", "--attacker", "Fire/Flying", "--defender", "Grass/Steel",
            "--critical",
        ]);
        let query = build_query(&parse(&argv)).unwrap();

        assert!(query.stab);
        assert!(query.critical);
        assert_eq!(query.type_effectiveness, 4.0);
    }

    #[test]
    fn test_query_without_attacker_keeps_stab_flag() {
        let mut argv = STATS.to_vec();
        argv.extend(["--move-type", "Water", "--defender", "Fire"]);
        let query = build_query(&parse(&argv)).unwrap();

        assert!(!query.stab);
        assert_eq!(query.type_effectiveness, 2.0);
    }

    #[test]
    fn test_conflicting_effectiveness_sources() {
        let mut argv = vec!["dexlab-damage"];
        argv.extend(STATS);
        argv.extend(["--effectiveness", "2", "--move-type", "Fire", "--defender", "Grass"]);
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_load_config_from_generation() {
        let mut argv = STATS.to_vec();
        argv.extend(["--generation", "4"]);
        let config = load_config(&parse(&argv)).unwrap();
        assert_eq!(config.critical_multiplier, 2.0);
    }
}
