//! Forward fixture difficulty.
//!
//! The "current round" is never supplied by the caller: it is the lowest
//! round present in the fixture list (the anchor round). The window covers
//! `[anchor, anchor + window)`.

use crate::models::{DataSet, Fixture, TeamId, Venue};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_WINDOW: u32 = 6;

/// Returned when a team has no fixture in the window. Means "no data",
/// not "easiest possible" (real ratings start at 1).
pub const NO_DATA: f64 = 0.0;

pub fn anchor_round(fixtures: &[Fixture]) -> Option<u32> {
    fixtures.iter().map(|f| f.round).min()
}

/// Mean rating faced by `team` over the window starting at the anchor round.
pub fn average_difficulty(team: TeamId, fixtures: &[Fixture], window: u32) -> f64 {
    let Some(anchor) = anchor_round(fixtures) else {
        return NO_DATA;
    };
    let end = anchor as u64 + window as u64;

    let (sum, count) = fixtures
        .iter()
        .filter(|f| (f.round as u64) < end)
        .filter_map(|f| f.difficulty_for(team))
        .fold((0u32, 0u32), |(sum, count), d| (sum + d as u32, count + 1));

    if count == 0 {
        NO_DATA
    } else {
        sum as f64 / count as f64
    }
}

/// Per-team forward difficulty, computed once per invocation.
#[derive(Debug, Clone)]
pub struct DifficultyTable {
    by_team: FxHashMap<TeamId, f64>,
    window: u32,
}

impl DifficultyTable {
    pub fn build(data: &DataSet, window: u32) -> Self {
        let by_team = data
            .teams()
            .iter()
            .map(|t| (t.id, average_difficulty(t.id, data.fixtures(), window)))
            .collect();
        Self { by_team, window }
    }

    /// Unknown teams read as [`NO_DATA`].
    pub fn get(&self, team: TeamId) -> f64 {
        self.by_team.get(&team).copied().unwrap_or(NO_DATA)
    }

    pub fn window(&self) -> u32 {
        self.window
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingFixture {
    pub round: u32,
    pub opponent: String,
    pub venue: Venue,
    pub difficulty: u8,
}

/// A team's next few fixtures; displays as `"CHE (H,3); LIV (A,4)"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FixtureRun(pub Vec<UpcomingFixture>);

impl fmt::Display for FixtureRun {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, fixture) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} ({},{})", fixture.opponent, fixture.venue, fixture.difficulty)?;
        }
        Ok(())
    }
}

/// Next `count` fixtures for `team` from the anchor round on, in round order.
pub fn upcoming_fixtures(team: TeamId, data: &DataSet, count: usize) -> FixtureRun {
    let Some(anchor) = anchor_round(data.fixtures()) else {
        return FixtureRun::default();
    };

    let mut upcoming: Vec<&Fixture> =
        data.fixtures().iter().filter(|f| f.round >= anchor && f.involves(team)).collect();
    upcoming.sort_by_key(|f| f.round);

    FixtureRun(
        upcoming
            .into_iter()
            .take(count)
            .filter_map(|f| {
                let (venue, opponent, difficulty) = f.side_of(team)?;
                Some(UpcomingFixture { round: f.round, opponent: data.team_code(opponent), venue, difficulty })
            })
            .collect(),
    )
}
