//! # fpl_core - Fantasy Football Transfer Advice Engine
//!
//! Scores players from form, playing time and upcoming fixture difficulty,
//! then derives transfer targets, budget-aware swaps, a greedy squad and
//! wildcard advice.
//!
//! ## Features
//! - Pure and deterministic: identical inputs give identical outputs
//! - Currency as integer tenths end to end
//! - Bad records are excluded and counted, never fatal

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{advise_chip, build_squad, current_squad, rank_transfer_targets, recommend_swaps, Outcome, SquadEntry};
pub use config::{AdvisorConfig, ChipThresholds, PositionQuotas, SquadRules};
pub use engine::{Chip, ChipAssessment, FixtureRun, ScoredCandidate, SquadBuild, Swap, SwapPlan, UpcomingFixture};
pub use error::{ConfigError, Result};
pub use models::{Availability, DataIssues, DataSet, Fixture, Player, PlayerId, Position, RosterSnapshot, Team, TeamId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
