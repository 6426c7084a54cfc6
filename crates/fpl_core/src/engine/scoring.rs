//! Composite player score.
//!
//! `score = form * minutes_ratio / (difficulty + EPSILON)`
//!
//! Higher is better. Scores are only comparable within one invocation's
//! player pool; there is no normalization across calls.

use super::difficulty::DifficultyTable;
use crate::models::Player;
use std::cmp::Ordering;

/// Keeps the division finite when difficulty is the 0.0 "no data" value.
pub const DIFFICULTY_EPSILON: f64 = 0.001;
pub const MINUTES_PER_ROUND: u32 = 90;

/// Most minutes a player could have played by `round` (floor of one round).
pub fn max_minutes(round: u32) -> f64 {
    round.max(1) as f64 * MINUTES_PER_ROUND as f64
}

/// Not clamped: values above 1.0 are tolerated as data noise.
pub fn minutes_ratio(minutes: u32, round: u32) -> f64 {
    minutes as f64 / max_minutes(round)
}

pub fn composite_score(form: f64, minutes_ratio: f64, difficulty: f64) -> f64 {
    (form * minutes_ratio) / (difficulty + DIFFICULTY_EPSILON)
}

/// A player with its derived fields for the current invocation.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub player: &'a Player,
    pub difficulty: f64,
    pub score: f64,
}

/// Scores players against one difficulty table and round.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'t> {
    table: &'t DifficultyTable,
    round: u32,
}

impl<'t> Scorer<'t> {
    pub fn new(table: &'t DifficultyTable, round: u32) -> Self {
        Self { table, round }
    }

    pub fn evaluate<'p>(&self, player: &'p Player) -> Scored<'p> {
        let difficulty = self.table.get(player.team);
        let ratio = minutes_ratio(player.minutes, self.round);
        Scored { player, difficulty, score: composite_score(player.form, ratio, difficulty) }
    }

    pub fn evaluate_all<'p, I>(&self, players: I) -> Vec<Scored<'p>>
    where
        I: IntoIterator<Item = &'p Player>,
    {
        players.into_iter().map(|p| self.evaluate(p)).collect()
    }
}

/// Best first. Stable: equal scores keep their input order.
pub fn sort_descending(scored: &mut [Scored<'_>]) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Worst first. Stable: equal scores keep their input order.
pub fn sort_ascending(scored: &mut [Scored<'_>]) {
    scored.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
}
