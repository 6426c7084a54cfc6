//! Public entry points.
//!
//! Every function validates the config first, then runs as a pure function
//! over the inputs: the same inputs always give the same output. Each result
//! carries the data issues seen while producing it.

use crate::config::AdvisorConfig;
use crate::engine::{chip, ranker, squad, swaps, ChipAssessment, DifficultyTable, ScoredCandidate, Scorer, SquadBuild, SwapPlan};
use crate::error::Result;
use crate::models::{currency, Availability, DataIssues, DataSet, PlayerId, Position, RosterSnapshot};
use log::warn;
use serde::{Deserialize, Serialize};

/// A result plus the records that had to be excluded to produce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub issues: DataIssues,
}

impl<T> Outcome<T> {
    fn new(value: T, data: &DataSet, unknown_players: usize) -> Self {
        if unknown_players > 0 {
            warn!("{} roster entries do not resolve to a known player", unknown_players);
        }
        let mut issues = data.issues();
        issues.unknown_player += unknown_players;
        Self { value, issues }
    }
}

pub fn rank_transfer_targets(
    data: &DataSet,
    snapshot: &RosterSnapshot,
    round: u32,
    config: &AdvisorConfig,
) -> Result<Outcome<Vec<ScoredCandidate>>> {
    config.validate()?;
    let table = DifficultyTable::build(data, config.window);
    let scorer = Scorer::new(&table, round);
    let (_, unknown) = data.owned_players(snapshot);

    let targets = ranker::rank_targets(data, snapshot, &scorer, config.top_n, config.summary_fixtures);
    Ok(Outcome::new(targets, data, unknown))
}

pub fn recommend_swaps(
    data: &DataSet,
    snapshot: &RosterSnapshot,
    round: u32,
    config: &AdvisorConfig,
) -> Result<Outcome<SwapPlan>> {
    config.validate()?;
    let table = DifficultyTable::build(data, config.window);
    let scorer = Scorer::new(&table, round);
    let (_, unknown) = data.owned_players(snapshot);

    let plan = swaps::recommend(data, snapshot, &scorer, config.max_transfers, config.squad.max_per_team);
    Ok(Outcome::new(plan, data, unknown))
}

/// Builds a squad from scratch; current ownership is ignored.
pub fn build_squad(
    data: &DataSet,
    total_budget: u32,
    round: u32,
    config: &AdvisorConfig,
) -> Result<Outcome<SquadBuild>> {
    config.validate()?;
    let table = DifficultyTable::build(data, config.window);
    let scorer = Scorer::new(&table, round);

    let build = squad::build(data, total_budget, &scorer, &config.squad, config.summary_fixtures);
    Ok(Outcome::new(build, data, 0))
}

pub fn advise_chip(
    data: &DataSet,
    snapshot: &RosterSnapshot,
    config: &AdvisorConfig,
) -> Result<Outcome<ChipAssessment>> {
    config.validate()?;
    let table = DifficultyTable::build(data, config.window);
    let (_, unknown) = data.owned_players(snapshot);

    let assessment = chip::assess(data, snapshot, &table, &config.chip);
    Ok(Outcome::new(assessment, data, unknown))
}

/// One row of the current squad view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadEntry {
    pub id: PlayerId,
    pub name: String,
    pub team_code: String,
    pub position: Position,
    pub price: f64,
    pub form: f64,
    pub minutes: u32,
    pub availability: Availability,
}

/// The manager's owned players, sorted by position then name.
pub fn current_squad(data: &DataSet, snapshot: &RosterSnapshot) -> Outcome<Vec<SquadEntry>> {
    let (owned, unknown) = data.owned_players(snapshot);

    let mut entries: Vec<SquadEntry> = owned
        .into_iter()
        .map(|p| SquadEntry {
            id: p.id,
            name: p.name.clone(),
            team_code: data.team_code(p.team),
            position: p.position,
            price: currency::to_display(p.cost as i64),
            form: p.form,
            minutes: p.minutes,
            availability: p.availability,
        })
        .collect();
    entries.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));

    Outcome::new(entries, data, unknown)
}
