use super::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn code(&self) -> char {
        match self {
            Venue::Home => 'H',
            Venue::Away => 'A',
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A scheduled match between two teams in one round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    pub round: u32,
    pub home: TeamId,
    pub away: TeamId,
    /// Difficulty faced by the home side, 1 (easiest) to 5 (hardest).
    pub home_difficulty: u8,
    /// Difficulty faced by the away side.
    pub away_difficulty: u8,
}

impl Fixture {
    pub fn new(round: u32, home: TeamId, away: TeamId, home_difficulty: u8, away_difficulty: u8) -> Self {
        Self { round, home, away, home_difficulty, away_difficulty }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// Side, opponent and rating from `team`'s point of view.
    pub fn side_of(&self, team: TeamId) -> Option<(Venue, TeamId, u8)> {
        if self.home == team {
            Some((Venue::Home, self.away, self.home_difficulty))
        } else if self.away == team {
            Some((Venue::Away, self.home, self.away_difficulty))
        } else {
            None
        }
    }

    /// Rating for the side `team` played on.
    pub fn difficulty_for(&self, team: TeamId) -> Option<u8> {
        self.side_of(team).map(|(_, _, difficulty)| difficulty)
    }

    pub(crate) fn has_valid_ratings(&self) -> bool {
        let range = MIN_DIFFICULTY..=MAX_DIFFICULTY;
        range.contains(&self.home_difficulty) && range.contains(&self.away_difficulty)
    }
}
