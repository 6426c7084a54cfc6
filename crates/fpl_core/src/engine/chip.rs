//! Rule-based chip advice. Only the wildcard is ever suggested.

use super::difficulty::DifficultyTable;
use crate::config::ChipThresholds;
use crate::models::{DataSet, RosterSnapshot};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Chip {
    Wildcard,
}

impl Chip {
    pub fn name(&self) -> &'static str {
        match self {
            Chip::Wildcard => "wildcard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChipAssessment {
    pub unavailable: usize,
    /// Mean forward difficulty across owned players' teams (0.0 for an empty roster).
    pub average_difficulty: f64,
    /// `None` means no recommendation.
    pub advice: Option<Chip>,
}

pub fn assess(
    data: &DataSet,
    snapshot: &RosterSnapshot,
    table: &DifficultyTable,
    thresholds: &ChipThresholds,
) -> ChipAssessment {
    let (owned, _) = data.owned_players(snapshot);

    let unavailable = owned.iter().filter(|p| !p.is_available()).count();
    let average_difficulty = if owned.is_empty() {
        0.0
    } else {
        owned.iter().map(|p| table.get(p.team)).sum::<f64>() / owned.len() as f64
    };

    let advice = (unavailable >= thresholds.unavailable || average_difficulty >= thresholds.difficulty)
        .then_some(Chip::Wildcard);

    info!(
        "Chip check: {} unavailable, average difficulty {:.2} -> {}",
        unavailable,
        average_difficulty,
        advice.map(|c| c.name()).unwrap_or("none")
    );

    ChipAssessment { unavailable, average_difficulty, advice }
}
