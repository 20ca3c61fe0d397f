use anyhow::{Context, Result};
use clap::Args;
use dexlab_calc::combined_effectiveness;

#[derive(Args)]
pub struct EffectivenessArgs {
    /// Attacking type
    pub attacking: String,

    /// Defender's primary type
    pub defending: String,

    /// Defender's secondary type
    pub defending_secondary: Option<String>,
}

pub fn execute(args: EffectivenessArgs) -> Result<()> {
    let multiplier = combined_effectiveness(
        &args.attacking,
        &args.defending,
        args.defending_secondary.as_deref(),
    )
    .context("Type chart lookup failed")?;

    println!("{}", multiplier);
    Ok(())
}
