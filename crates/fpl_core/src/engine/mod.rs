//! Scoring and selection engine.
//!
//! Data flows one way: fixtures → [`difficulty`] → [`scoring`] →
//! {[`ranker`], [`swaps`], [`squad`]}; [`chip`] only needs difficulty.

pub mod candidate;
pub mod chip;
pub mod difficulty;
pub mod ranker;
pub mod scoring;
pub mod squad;
pub mod swaps;

mod state;


pub use candidate::ScoredCandidate;
pub use chip::{Chip, ChipAssessment};
pub use difficulty::{average_difficulty, DifficultyTable, FixtureRun, UpcomingFixture};
pub use scoring::{composite_score, Scored, Scorer};
pub use squad::SquadBuild;
pub use swaps::{Swap, SwapPlan};
