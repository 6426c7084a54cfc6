use super::currency;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type PlayerId = u32;
pub type TeamId = u32;

/// Squad position category.
///
/// Declaration order is the order the squad builder fills positions in,
/// so `Ord` doubles as the display sort key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] =
        [Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Forward];

    /// Decode the API's `element_type` code (1=GK ... 4=FWD).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Position::Goalkeeper),
            2 => Some(Position::Defender),
            3 => Some(Position::Midfielder),
            4 => Some(Position::Forward),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    /// Short label used in every table (GKP/DEF/MID/FWD).
    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Injury, suspension and every other exclusion reason collapse into
/// `Unavailable`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    /// Only the API status `"a"` counts as available; doubtful (`"d"`) does not.
    pub fn from_status(status: &str) -> Self {
        if status.trim() == "a" {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

/// Read-only player record as seen by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub position: Position,
    /// Price in tenths of a display unit (55 = 5.5m).
    pub cost: u32,
    pub availability: Availability,
    /// Points per round played.
    pub form: f64,
    pub minutes: u32,
}

impl Player {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    pub fn price(&self) -> f64 {
        currency::to_display(self.cost as i64)
    }
}
