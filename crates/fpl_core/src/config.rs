//! Advisor configuration.
//!
//! All tuning knobs live here so the engine functions stay parameter-light.
//! Missing JSON fields fall back to the defaults below.
//!
//! ```rust
//! use fpl_core::config::AdvisorConfig;
//!
//! let config = AdvisorConfig::default();
//! assert!(config.validate().is_ok());
//! let long = AdvisorConfig::long_horizon();
//! assert_eq!(long.window, 10);
//! ```

use crate::error::{ConfigError, Result};
use crate::models::Position;
use serde::{Deserialize, Serialize};

/// Required players per position in a full squad.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PositionQuotas {
    pub goalkeepers: u8,
    pub defenders: u8,
    pub midfielders: u8,
    pub forwards: u8,
}

impl Default for PositionQuotas {
    fn default() -> Self {
        Self { goalkeepers: 2, defenders: 5, midfielders: 5, forwards: 3 }
    }
}

impl PositionQuotas {
    pub fn for_position(&self, position: Position) -> u8 {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    pub fn total(&self) -> usize {
        Position::ALL.iter().map(|&p| self.for_position(p) as usize).sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SquadRules {
    pub quotas: PositionQuotas,
    /// Occupancy cap: most players allowed from one club.
    pub max_per_team: u8,
}

impl Default for SquadRules {
    fn default() -> Self {
        Self { quotas: PositionQuotas::default(), max_per_team: 3 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChipThresholds {
    /// Unavailable owned players at or above which a wildcard is advised.
    pub unavailable: usize,
    /// Mean forward difficulty at or above which a wildcard is advised.
    pub difficulty: f64,
}

impl Default for ChipThresholds {
    fn default() -> Self {
        Self { unavailable: 3, difficulty: 3.5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Forward difficulty window, in rounds from the anchor round.
    pub window: u32,
    /// Fixtures shown in each candidate's summary.
    pub summary_fixtures: usize,
    /// Transfer targets returned by the ranker.
    pub top_n: usize,
    /// Owned players considered for replacement.
    pub max_transfers: usize,
    pub squad: SquadRules,
    pub chip: ChipThresholds,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            window: 6,
            summary_fixtures: 5,
            top_n: 5,
            max_transfers: 2,
            squad: SquadRules::default(),
            chip: ChipThresholds::default(),
        }
    }
}

impl AdvisorConfig {
    /// Looks further ahead; suited to wildcard planning.
    pub fn long_horizon() -> Self {
        Self { window: 10, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ConfigError::InvalidWindow(self.window));
        }
        if self.summary_fixtures == 0 {
            return Err(ConfigError::InvalidSummaryLength(self.summary_fixtures));
        }
        for position in Position::ALL {
            let quota = self.squad.quotas.for_position(position);
            if quota == 0 {
                return Err(ConfigError::InvalidQuota { position: position.label(), quota });
            }
        }
        if self.squad.max_per_team == 0 {
            return Err(ConfigError::InvalidTeamCap(self.squad.max_per_team));
        }
        if !self.chip.difficulty.is_finite() {
            return Err(ConfigError::InvalidDifficultyThreshold(self.chip.difficulty));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_rules() {
        let config = AdvisorConfig::default();
        assert_eq!(config.window, 6);
        assert_eq!(config.squad.quotas.total(), 15);
        assert_eq!(config.squad.max_per_team, 3);
        assert_eq!(config.chip.unavailable, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AdvisorConfig::from_json(r#"{"window": 4, "squad": {"max_per_team": 2}}"#).unwrap();
        assert_eq!(config.window, 4);
        assert_eq!(config.squad.max_per_team, 2);
        assert_eq!(config.squad.quotas, PositionQuotas::default());
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(AdvisorConfig::from_json("{window: }"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_non_positive_settings() {
        let mut config = AdvisorConfig { window: 0, ..AdvisorConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWindow(0)));

        config = AdvisorConfig::default();
        config.squad.quotas.midfielders = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidQuota { position: "MID", quota: 0 }));

        config = AdvisorConfig::default();
        config.squad.max_per_team = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTeamCap(0)));

        config = AdvisorConfig::default();
        config.summary_fixtures = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSummaryLength(0)));

        config = AdvisorConfig::default();
        config.chip.difficulty = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDifficultyThreshold(_))));
    }
}
