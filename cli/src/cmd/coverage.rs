use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dexlab_calc::{TeamCoverage, TeamMember, Typing, analyze_team_coverage};
use dexlab_records::{Region, SpeciesRecord, dedupe_species, parse_species_table};
use serde::Serialize;

#[derive(Args)]
pub struct CoverageArgs {
    /// JSON array of species rows (1-6 entries)
    pub roster: PathBuf,
}

#[derive(Debug, Serialize)]
struct MemberReport {
    name: String,
    typing: Typing,
    region: Option<Region>,
}

#[derive(Debug, Serialize)]
struct CoverageReport {
    members: Vec<MemberReport>,
    coverage: TeamCoverage,
    uncovered_types: Vec<dexlab_calc::Type>,
}

fn build_report(records: Vec<SpeciesRecord>) -> Result<CoverageReport> {
    let total = records.len();
    let records = dedupe_species(records);
    if records.len() < total {
        tracing::warn!(
            dropped = total - records.len(),
            "Duplicate species rows dropped from roster"
        );
    }

    let roster = records
        .iter()
        .map(TeamMember::from_record)
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid species typing in roster")?;

    let coverage = analyze_team_coverage(&roster).context("Coverage analysis failed")?;

    let members = records
        .iter()
        .zip(roster)
        .map(|(record, member)| MemberReport {
            name: member.name,
            typing: member.typing,
            region: Region::for_dex(record.dex),
        })
        .collect();

    Ok(CoverageReport {
        members,
        uncovered_types: coverage.uncovered_types(),
        coverage,
    })
}

pub fn execute(args: CoverageArgs) -> Result<()> {
    let text = fs::read_to_string(&args.roster)
        .with_context(|| format!("Failed to read roster {}", args.roster.display()))?;
    let records = parse_species_table(&text)
        .with_context(|| format!("Failed to parse roster {}", args.roster.display()))?;

    let report = build_report(records)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    );
    Ok(())
}
