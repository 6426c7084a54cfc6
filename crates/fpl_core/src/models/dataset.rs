//! Validated player/team/fixture collections.
//!
//! `DataSet::new` is the single place where inconsistent or malformed
//! records are dropped. Everything downstream may assume:
//! - player and team ids are unique
//! - every player's team exists
//! - every fixture has two distinct known teams, a round >= 1 and ratings in 1..=5
//! - every player's form is finite and non-negative

use super::{Fixture, Player, PlayerId, RosterSnapshot, Team, TeamId};
use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Counts of records excluded because they could not be used.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataIssues {
    /// Records missing or carrying unusable required values.
    pub missing_data: usize,
    /// Players whose team is not in the team list.
    pub unknown_team: usize,
    /// Roster entries that do not resolve to a player in the pool.
    pub unknown_player: usize,
    /// Fixtures with unknown or identical teams, round 0, or bad ratings.
    pub invalid_fixture: usize,
    /// Repeated player or team ids (first occurrence wins).
    pub duplicate: usize,
}

impl DataIssues {
    pub fn total(&self) -> usize {
        self.missing_data + self.unknown_team + self.unknown_player + self.invalid_fixture + self.duplicate
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    pub fn merge(&mut self, other: DataIssues) {
        self.missing_data += other.missing_data;
        self.unknown_team += other.unknown_team;
        self.unknown_player += other.unknown_player;
        self.invalid_fixture += other.invalid_fixture;
        self.duplicate += other.duplicate;
    }
}

#[derive(Debug, Clone)]
pub struct DataSet {
    players: Vec<Player>,
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    player_index: FxHashMap<PlayerId, usize>,
    team_index: FxHashMap<TeamId, usize>,
    issues: DataIssues,
}

impl DataSet {
    pub fn new(players: Vec<Player>, teams: Vec<Team>, fixtures: Vec<Fixture>) -> Self {
        let mut issues = DataIssues::default();

        let mut team_index = FxHashMap::default();
        let mut kept_teams = Vec::with_capacity(teams.len());
        for team in teams {
            if team_index.contains_key(&team.id) {
                issues.duplicate += 1;
                warn!("Dropping duplicate team id {}", team.id);
                continue;
            }
            team_index.insert(team.id, kept_teams.len());
            kept_teams.push(team);
        }

        let mut player_index = FxHashMap::default();
        let mut kept_players = Vec::with_capacity(players.len());
        for player in players {
            if player_index.contains_key(&player.id) {
                issues.duplicate += 1;
                warn!("Dropping duplicate player id {}", player.id);
                continue;
            }
            if !team_index.contains_key(&player.team) {
                issues.unknown_team += 1;
                warn!("Dropping player {} ({}): unknown team {}", player.id, player.name, player.team);
                continue;
            }
            if !player.form.is_finite() || player.form < 0.0 {
                issues.missing_data += 1;
                warn!("Dropping player {} ({}): unusable form {}", player.id, player.name, player.form);
                continue;
            }
            player_index.insert(player.id, kept_players.len());
            kept_players.push(player);
        }

        let kept_fixtures: Vec<Fixture> = fixtures
            .into_iter()
            .filter(|f| {
                let valid = f.round >= 1
                    && f.home != f.away
                    && team_index.contains_key(&f.home)
                    && team_index.contains_key(&f.away)
                    && f.has_valid_ratings();
                if !valid {
                    issues.invalid_fixture += 1;
                    warn!("Dropping fixture {:?}", f);
                }
                valid
            })
            .collect();

        Self {
            players: kept_players,
            teams: kept_teams,
            fixtures: kept_fixtures,
            player_index,
            team_index,
            issues,
        }
    }

    /// Players in their original input order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn issues(&self) -> DataIssues {
        self.issues
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.player_index.get(&id).map(|&i| &self.players[i])
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.team_index.get(&id).map(|&i| &self.teams[i])
    }

    /// Short code for display; falls back to the numeric id.
    pub fn team_code(&self, id: TeamId) -> String {
        self.team(id).map(|t| t.short_name.clone()).unwrap_or_else(|| id.to_string())
    }

    /// Owned players in pool order, plus the number of roster ids that did
    /// not resolve.
    pub fn owned_players(&self, snapshot: &RosterSnapshot) -> (Vec<&Player>, usize) {
        let owned: Vec<&Player> = self.players.iter().filter(|p| snapshot.owns(p.id)).collect();
        let resolved: FxHashSet<PlayerId> = owned.iter().map(|p| p.id).collect();
        let unknown = snapshot.owned.iter().filter(|id| !resolved.contains(id)).count();
        (owned, unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Position};

    fn player(id: PlayerId, team: TeamId, form: f64) -> Player {
        Player {
            id,
            name: format!("P{id}"),
            team,
            position: Position::Defender,
            cost: 45,
            availability: Availability::Available,
            form,
            minutes: 90,
        }
    }

    fn teams() -> Vec<Team> {
        vec![Team::new(1, "Arsenal", "ARS"), Team::new(2, "Chelsea", "CHE")]
    }

    #[test]
    fn drops_players_on_unknown_teams_and_bad_form() {
        let data = DataSet::new(
            vec![player(1, 1, 4.0), player(2, 9, 4.0), player(3, 2, f64::NAN), player(4, 2, -1.0), player(1, 2, 3.0)],
            teams(),
            vec![],
        );
        assert_eq!(data.players().len(), 1);
        assert_eq!(data.player(1).map(|p| p.team), Some(1));
        let issues = data.issues();
        assert_eq!(issues.unknown_team, 1);
        assert_eq!(issues.missing_data, 2);
        assert_eq!(issues.duplicate, 1);
        assert_eq!(issues.total(), 4);
    }

    #[test]
    fn drops_invalid_fixtures() {
        let data = DataSet::new(
            vec![],
            teams(),
            vec![
                Fixture::new(1, 1, 2, 2, 3),
                Fixture::new(1, 1, 1, 2, 3),
                Fixture::new(1, 1, 7, 2, 3),
                Fixture::new(0, 1, 2, 2, 3),
                Fixture::new(2, 2, 1, 6, 3),
            ],
        );
        assert_eq!(data.fixtures().len(), 1);
        assert_eq!(data.issues().invalid_fixture, 4);
    }

    #[test]
    fn owned_players_reports_unresolved_ids() {
        let data = DataSet::new(vec![player(1, 1, 4.0), player(2, 2, 4.0)], teams(), vec![]);
        let snapshot = RosterSnapshot::new([2, 1, 99], 0, 0);
        let (owned, unknown) = data.owned_players(&snapshot);
        assert_eq!(owned.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(unknown, 1);
        assert_eq!(data.team_code(2), "CHE");
        assert_eq!(data.team_code(42), "42");
    }
}
