//! Greedy squad construction from an empty roster.
//!
//! Positions are filled in a fixed order (GK, DEF, MID, FWD). Each pass
//! walks its position's pool best first and takes anyone affordable whose
//! club still has room. There is no backtracking: an early position may
//! spend money a later one needed.

use super::candidate::ScoredCandidate;
use super::scoring::{sort_descending, Scorer};
use super::state::SquadState;
use crate::config::SquadRules;
use crate::models::{currency, DataSet, Position};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SquadBuild {
    /// Accepted players in acceptance order.
    pub picks: Vec<ScoredCandidate>,
    pub total_budget: u32,
    pub spent: u32,
    pub remaining: u32,
}

impl SquadBuild {
    /// No player could be accepted: there is no feasible squad.
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn count(&self, position: Position) -> usize {
        self.picks.iter().filter(|p| p.position == position).count()
    }

    /// Every quota filled.
    pub fn is_complete(&self, rules: &SquadRules) -> bool {
        Position::ALL.iter().all(|&p| self.count(p) == rules.quotas.for_position(p) as usize)
    }

    /// `"Built using £99.5m of £100.0m; £0.5m remaining"`
    pub fn budget_summary(&self) -> String {
        format!(
            "Built using £{:.1}m of £{:.1}m; £{:.1}m remaining",
            currency::to_display(self.spent as i64),
            currency::to_display(self.total_budget as i64),
            currency::to_display(self.remaining as i64)
        )
    }
}

pub fn build(
    data: &DataSet,
    total_budget: u32,
    scorer: &Scorer<'_>,
    rules: &SquadRules,
    summary_fixtures: usize,
) -> SquadBuild {
    let mut state = SquadState::empty(total_budget as i64, rules.max_per_team);
    let available: Vec<_> = scorer.evaluate_all(data.players().iter().filter(|p| p.is_available()));

    let mut accepted = Vec::with_capacity(rules.quotas.total());

    for position in Position::ALL {
        let needed = rules.quotas.for_position(position) as usize;
        let mut pool: Vec<_> = available.iter().copied().filter(|s| s.player.position == position).collect();
        sort_descending(&mut pool);

        let mut filled = 0;
        for candidate in pool {
            if filled >= needed {
                break;
            }
            let player = candidate.player;
            if !state.can_afford(player.cost) || !state.has_room(player.team) {
                continue;
            }
            state.add(player);
            filled += 1;
            debug!("Picked {} {} for {}", position, player.name, currency::to_display(player.cost as i64));
            accepted.push(candidate);
        }

        if filled < needed {
            warn!("Only filled {filled}/{needed} {position} slots");
        }
    }

    let remaining = state.budget().max(0) as u32;
    let picks: Vec<ScoredCandidate> = accepted
        .iter()
        .enumerate()
        .map(|(i, s)| ScoredCandidate::annotate(i + 1, s, data, summary_fixtures))
        .collect();

    let build = SquadBuild { picks, total_budget, spent: total_budget - remaining, remaining };
    info!("{} ({} players)", build.budget_summary(), build.picks.len());
    build
}
