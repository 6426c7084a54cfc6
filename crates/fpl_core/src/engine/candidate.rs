use super::difficulty::{upcoming_fixtures, FixtureRun};
use super::scoring::Scored;
use crate::models::{currency, Availability, DataSet, PlayerId, Position, TeamId};
use serde::{Deserialize, Serialize};

/// A scored player annotated for presentation.
///
/// `rank` is 1-based: ranking position for transfer targets, acceptance
/// order for squad picks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub team_code: String,
    pub position: Position,
    pub position_label: String,
    /// Cost in tenths.
    pub cost: u32,
    /// Display price (cost / 10).
    pub price: f64,
    pub form: f64,
    pub minutes: u32,
    pub availability: Availability,
    /// Mean forward difficulty for the player's team (0.0 = no data).
    pub difficulty: f64,
    pub score: f64,
    pub fixtures: FixtureRun,
}

impl ScoredCandidate {
    pub(crate) fn annotate(rank: usize, scored: &Scored<'_>, data: &DataSet, summary_fixtures: usize) -> Self {
        let p = scored.player;
        Self {
            rank,
            id: p.id,
            name: p.name.clone(),
            team: p.team,
            team_code: data.team_code(p.team),
            position: p.position,
            position_label: p.position.label().to_string(),
            cost: p.cost,
            price: currency::to_display(p.cost as i64),
            form: p.form,
            minutes: p.minutes,
            availability: p.availability,
            difficulty: scored.difficulty,
            score: scored.score,
            fixtures: upcoming_fixtures(p.team, data, summary_fixtures),
        }
    }

    /// Text form of the fixture run.
    pub fn fixture_summary(&self) -> String {
        self.fixtures.to_string()
    }
}
