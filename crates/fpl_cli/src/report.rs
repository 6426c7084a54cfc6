//! One advisor run: which sections to compute, and the combined result.

use crate::loader::{LoadStats, LoadedInput};
use anyhow::{Context, Result};
use fpl_core::engine::difficulty::anchor_round;
use fpl_core::{
    advise_chip, build_squad, current_squad, rank_transfer_targets, recommend_swaps, AdvisorConfig, ChipAssessment,
    DataIssues, Outcome, ScoredCandidate, SquadBuild, SquadEntry, SwapPlan,
};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Targets,
    Team,
    Swaps,
    Chip,
    Wildcard,
}

impl Section {
    /// The full advice run: targets, current team, swaps and chip advice.
    pub const ADVICE: [Section; 4] = [Section::Targets, Section::Team, Section::Swaps, Section::Chip];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// RFC3339
    pub generated_at: String,
    /// SHA256 over the input documents
    pub fingerprint: String,
    pub round: u32,
    pub config: AdvisorConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<ScoredCandidate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<SquadEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swaps: Option<SwapPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip: Option<ChipAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<SquadBuild>,
    pub issues: DataIssues,
    pub load_stats: LoadStats,
}

/// Round used for minutes normalisation: the requested one, else the first
/// round in the fixture list, else 1.
pub fn resolve_round(requested: Option<u32>, input: &LoadedInput) -> u32 {
    requested.or_else(|| anchor_round(input.data.fixtures())).unwrap_or(1)
}

fn take<T>(outcome: Outcome<T>, issues: &mut DataIssues) -> T {
    // Every outcome carries the same data set issues; only roster lookups differ.
    issues.unknown_player = issues.unknown_player.max(outcome.issues.unknown_player);
    outcome.value
}

pub fn build_report(input: &LoadedInput, round: u32, config: &AdvisorConfig, sections: &[Section]) -> Result<Report> {
    let data = &input.data;
    let snapshot = &input.snapshot;

    let mut issues = data.issues();
    issues.merge(DataIssues { missing_data: input.stats.skipped(), ..DataIssues::default() });

    let mut report = Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        fingerprint: input.fingerprint.clone(),
        round,
        config: config.clone(),
        targets: None,
        team: None,
        swaps: None,
        chip: None,
        wildcard: None,
        issues,
        load_stats: input.stats,
    };

    for section in sections {
        match section {
            Section::Targets => {
                let outcome = rank_transfer_targets(data, snapshot, round, config).context("Ranking transfer targets")?;
                report.targets = Some(take(outcome, &mut report.issues));
            }
            Section::Team => {
                report.team = Some(take(current_squad(data, snapshot), &mut report.issues));
            }
            Section::Swaps => {
                let outcome = recommend_swaps(data, snapshot, round, config).context("Recommending swaps")?;
                report.swaps = Some(take(outcome, &mut report.issues));
            }
            Section::Chip => {
                let outcome = advise_chip(data, snapshot, config).context("Assessing chips")?;
                report.chip = Some(take(outcome, &mut report.issues));
            }
            Section::Wildcard => {
                let outcome =
                    build_squad(data, snapshot.total_budget(), round, config).context("Building wildcard squad")?;
                report.wildcard = Some(take(outcome, &mut report.issues));
            }
        }
    }

    if !report.issues.is_clean() {
        info!("{} input records were excluded: {:?}", report.issues.total(), report.issues);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpl_core::{Availability, DataSet, Fixture, Player, Position, RosterSnapshot, Team};

    fn input(owned: &[u32]) -> LoadedInput {
        let teams = vec![Team::new(1, "Arsenal", "ARS"), Team::new(2, "Chelsea", "CHE")];
        let players = vec![
            Player {
                id: 1,
                name: "Saka".into(),
                team: 1,
                position: Position::Midfielder,
                cost: 100,
                availability: Availability::Available,
                form: 6.0,
                minutes: 450,
            },
            Player {
                id: 2,
                name: "Palmer".into(),
                team: 2,
                position: Position::Midfielder,
                cost: 105,
                availability: Availability::Available,
                form: 7.0,
                minutes: 450,
            },
        ];
        let fixtures = vec![Fixture::new(5, 1, 2, 3, 4), Fixture::new(9, 2, 1, 2, 2)];
        let stats = LoadStats { unscheduled_fixtures: 1, ..LoadStats::default() };
        LoadedInput {
            data: DataSet::new(players, teams, fixtures),
            snapshot: RosterSnapshot::new(owned.iter().copied(), 5, 100),
            stats,
            fingerprint: "abc".into(),
        }
    }

    #[test]
    fn test_round_falls_back_to_first_fixture_round() {
        let input = input(&[]);
        assert_eq!(resolve_round(Some(7), &input), 7);
        assert_eq!(resolve_round(None, &input), 5);
    }

    #[test]
    fn test_only_requested_sections_are_filled() {
        let report = build_report(&input(&[1]), 5, &AdvisorConfig::default(), &[Section::Targets]).unwrap();
        assert_eq!(report.targets.as_ref().map(Vec::len), Some(1));
        assert!(report.team.is_none() && report.swaps.is_none() && report.chip.is_none());
        assert_eq!(report.fingerprint, "abc");
    }

    #[test]
    fn test_unknown_roster_entries_are_counted_once() {
        let report = build_report(&input(&[1, 77]), 5, &AdvisorConfig::default(), &Section::ADVICE).unwrap();
        assert_eq!(report.issues.unknown_player, 1);
        assert_eq!(report.swaps.map(|s| s.swaps.len()), Some(1));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let config = AdvisorConfig { window: 0, ..AdvisorConfig::default() };
        assert!(build_report(&input(&[]), 5, &config, &[Section::Chip]).is_err());
    }
}
