//! Command-line front end for dexlab.
//!
//! Usage:
//!   dexlab effectiveness Ice Dragon Flying
//!   dexlab damage --level 100 --attack 300 --defense 200 --power 100 --effectiveness 2 --stab
//!   dexlab damage --level 50 --attack 120 --defense 90 --power 80 \
//!       --move-type Fire --attacker Fire/Flying --defender Grass/Steel --roll --seed 7
//!   dexlab coverage team.json
//!
//! Set `RUST_LOG=debug` to see analysis events on stderr.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{coverage, damage, effectiveness};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dexlab", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a type chart multiplier
    Effectiveness(effectiveness::EffectivenessArgs),

    /// Compute the damage of a single hit
    Damage(damage::DamageArgs),

    /// Analyze coverage and weaknesses of a roster file
    Coverage(coverage::CoverageArgs),
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Effectiveness(args) => effectiveness::execute(args),
        Commands::Damage(args) => damage::execute(args),
        Commands::Coverage(args) => coverage::execute(args),
    }
}
