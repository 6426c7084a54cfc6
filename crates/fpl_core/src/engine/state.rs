//! Mutable bookkeeping for a single recommendation or build pass.
//!
//! Created at the start of a pass, mutated after every accepted decision,
//! dropped when the pass returns. Never shared between calls.

use crate::models::{Player, PlayerId, TeamId};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone)]
pub(crate) struct SquadState {
    owned: FxHashSet<PlayerId>,
    occupancy: FxHashMap<TeamId, u8>,
    budget: i64,
    max_per_team: u8,
}

impl SquadState {
    pub fn empty(budget: i64, max_per_team: u8) -> Self {
        Self { owned: FxHashSet::default(), occupancy: FxHashMap::default(), budget, max_per_team }
    }

    /// Seeds ownership and occupancy from an existing roster without
    /// touching the budget.
    pub fn seeded<'a>(players: impl IntoIterator<Item = &'a Player>, budget: i64, max_per_team: u8) -> Self {
        let mut state = Self::empty(budget, max_per_team);
        for player in players {
            state.owned.insert(player.id);
            let count = state.occupancy.entry(player.team).or_insert(0);
            *count = count.saturating_add(1);
        }
        state
    }

    pub fn owns(&self, id: PlayerId) -> bool {
        self.owned.contains(&id)
    }

    pub fn occupancy(&self, team: TeamId) -> u8 {
        self.occupancy.get(&team).copied().unwrap_or(0)
    }

    pub fn has_room(&self, team: TeamId) -> bool {
        self.occupancy(team) < self.max_per_team
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        cost as i64 <= self.budget
    }

    pub fn add(&mut self, player: &Player) {
        debug_assert!(self.has_room(player.team));
        debug_assert!(self.can_afford(player.cost));
        self.owned.insert(player.id);
        *self.occupancy.entry(player.team).or_insert(0) += 1;
        self.budget -= player.cost as i64;
    }

    /// Replaces `sell` with `buy`, refunding the sale before paying.
    pub fn swap(&mut self, sell: &Player, buy: &Player) {
        self.owned.remove(&sell.id);
        if let Some(count) = self.occupancy.get_mut(&sell.team) {
            *count = count.saturating_sub(1);
        }
        self.budget += sell.cost as i64;
        self.add(buy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Position};

    fn player(id: PlayerId, team: TeamId, cost: u32) -> Player {
        Player {
            id,
            name: format!("P{id}"),
            team,
            position: Position::Midfielder,
            cost,
            availability: Availability::Available,
            form: 1.0,
            minutes: 0,
        }
    }

    #[test]
    fn seeded_state_counts_teams() {
        let roster = [player(1, 1, 50), player(2, 1, 50), player(3, 2, 50)];
        let state = SquadState::seeded(roster.iter(), 10, 3);
        assert_eq!(state.occupancy(1), 2);
        assert_eq!(state.occupancy(2), 1);
        assert_eq!(state.occupancy(3), 0);
        assert_eq!(state.budget(), 10);
        assert!(state.owns(2));
    }

    #[test]
    fn swap_moves_budget_and_occupancy() {
        let roster = [player(1, 1, 50), player(2, 1, 50), player(3, 1, 50)];
        let mut state = SquadState::seeded(roster.iter(), 5, 3);
        assert!(!state.has_room(1));

        let buy = player(9, 2, 54);
        state.swap(&roster[0], &buy);
        assert_eq!(state.budget(), 1);
        assert_eq!(state.occupancy(1), 2);
        assert_eq!(state.occupancy(2), 1);
        assert!(state.owns(9));
        assert!(!state.owns(1));
        assert!(state.has_room(1));
    }

    #[test]
    fn add_spends_budget() {
        let mut state = SquadState::empty(100, 2);
        state.add(&player(1, 1, 40));
        state.add(&player(2, 1, 40));
        assert_eq!(state.budget(), 20);
        assert!(!state.has_room(1));
        assert!(!state.can_afford(21));
        assert_eq!(state.occupancy(1), 2);
    }
}
