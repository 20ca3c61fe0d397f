use rayon::prelude::*;

use super::{TeamCoverage, TeamMember, analyze_team_coverage};
use crate::error::CalcError;

/// Analyze many rosters in parallel. Results keep input order.
pub fn analyze_many<R>(rosters: &[R]) -> Vec<Result<TeamCoverage, CalcError>>
where
    R: AsRef<[TeamMember]> + Sync,
{
    rosters
        .par_iter()
        .map(|roster| analyze_team_coverage(roster.as_ref()))
        .collect()
}

/// Index and coverage of the strongest roster: most covered types, ties
/// broken by fewer total weaknesses, then by earliest index.
///
/// Fails on the first roster that cannot be analyzed; returns `None` for
/// an empty input.
pub fn best_roster<R>(rosters: &[R]) -> Result<Option<(usize, TeamCoverage)>, CalcError>
where
    R: AsRef<[TeamMember]> + Sync,
{
    let analyzed = analyze_many(rosters)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let best = analyzed
        .into_iter()
        .enumerate()
        .min_by_key(|(idx, coverage)| {
            (
                std::cmp::Reverse(coverage.covered_types.len()),
                coverage.total_weaknesses(),
                *idx,
            )
        });

    if let Some((idx, coverage)) = &best {
        tracing::debug!(
            rosters = rosters.len(),
            best = *idx,
            covered = coverage.covered_types.len(),
            "selected best roster"
        );
    }

    Ok(best)
}
