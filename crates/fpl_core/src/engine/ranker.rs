//! Transfer target ranking: the whole eligible pool, best first.

use super::candidate::ScoredCandidate;
use super::scoring::{sort_descending, Scorer};
use crate::models::{DataSet, RosterSnapshot};
use log::debug;

/// Top `count` players that are neither owned nor unavailable.
///
/// Ties keep pool order. An empty eligible pool gives an empty result.
pub fn rank_targets(
    data: &DataSet,
    snapshot: &RosterSnapshot,
    scorer: &Scorer<'_>,
    count: usize,
    summary_fixtures: usize,
) -> Vec<ScoredCandidate> {
    let mut scored = scorer.evaluate_all(data.players().iter().filter(|p| !snapshot.owns(p.id) && p.is_available()));
    debug!("Ranking {} eligible transfer targets", scored.len());

    sort_descending(&mut scored);

    scored
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, s)| ScoredCandidate::annotate(i + 1, s, data, summary_fixtures))
        .collect()
}
