//! Budget-constrained single-swap recommendations.
//!
//! The weakest owned players are considered once each, worst first, up to
//! `max_transfers`. Each accepted swap updates the bank, ownership and club
//! occupancy seen by the next one. A slot with no affordable, eligible
//! replacement is skipped; there is no fallback to the next-weakest player.
//! A player sold in an earlier slot is a normal candidate again.

use super::scoring::{sort_ascending, sort_descending, Scorer};
use super::state::SquadState;
use crate::models::{currency, DataSet, PlayerId, RosterSnapshot};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Swap {
    pub sell_id: PlayerId,
    pub sell_name: String,
    pub buy_id: PlayerId,
    pub buy_name: String,
    /// `buy.cost - sell.cost`, tenths. Positive means the bank shrinks.
    pub cost_delta: i64,
    pub sell_score: f64,
    pub buy_score: f64,
}

impl Swap {
    pub fn impact_label(&self) -> String {
        currency::impact_label(self.cost_delta)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SwapPlan {
    pub swaps: Vec<Swap>,
    /// Bank after every swap is applied, tenths.
    pub bank_after: i64,
    /// Slots considered but left unchanged.
    pub skipped_slots: usize,
}

impl SwapPlan {
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }
}

pub fn recommend(
    data: &DataSet,
    snapshot: &RosterSnapshot,
    scorer: &Scorer<'_>,
    max_transfers: usize,
    max_per_team: u8,
) -> SwapPlan {
    let (owned, _) = data.owned_players(snapshot);
    let mut state = SquadState::seeded(owned.iter().copied(), snapshot.bank as i64, max_per_team);

    let mut weakest = scorer.evaluate_all(owned.iter().copied());
    sort_ascending(&mut weakest);
    weakest.truncate(max_transfers);

    let mut plan = SwapPlan::default();

    for sell in weakest {
        let sell_player = sell.player;
        let available_budget = state.budget() + sell_player.cost as i64;

        let mut candidates = scorer.evaluate_all(data.players().iter().filter(|p| {
            p.position == sell_player.position
                && !state.owns(p.id)
                && p.is_available()
                && p.cost as i64 <= available_budget
        }));

        if candidates.is_empty() {
            debug!(
                "No affordable {} replacement for {} within {}",
                sell_player.position,
                sell_player.name,
                currency::to_display(available_budget)
            );
            plan.skipped_slots += 1;
            continue;
        }

        sort_descending(&mut candidates);

        let Some(buy) = candidates.iter().find(|c| state.has_room(c.player.team)) else {
            debug!("Every replacement for {} would break the club cap", sell_player.name);
            plan.skipped_slots += 1;
            continue;
        };

        let buy_player = buy.player;
        state.swap(sell_player, buy_player);
        debug_assert!(state.budget() >= 0);
        debug_assert!(state.occupancy(buy_player.team) <= max_per_team);

        debug!(
            "Swap {} -> {} (score {:.3} -> {:.3}, bank {})",
            sell_player.name,
            buy_player.name,
            sell.score,
            buy.score,
            currency::to_display(state.budget())
        );

        plan.swaps.push(Swap {
            sell_id: sell_player.id,
            sell_name: sell_player.name.clone(),
            buy_id: buy_player.id,
            buy_name: buy_player.name.clone(),
            cost_delta: buy_player.cost as i64 - sell_player.cost as i64,
            sell_score: sell.score,
            buy_score: buy.score,
        });
    }

    plan.bank_after = state.budget();
    info!("Recommended {} swap(s), {} slot(s) skipped", plan.swaps.len(), plan.skipped_slots);
    plan
}
