//! Load → advise → render over saved documents in a temp directory.

use fpl_cli::loader::{BOOTSTRAP_FILE, FIXTURES_FILE, PICKS_FILE};
use fpl_cli::{build_report, load_input, render, resolve_round, OutputFormat, Section};
use fpl_core::{AdvisorConfig, Position};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEAMS: u32 = 6;

fn element_id(team: u32, position: u32, k: u32) -> u32 {
    (team - 1) * 8 + (position - 1) * 2 + k + 1
}

fn bootstrap() -> Value {
    let mut elements = Vec::new();
    for team in 1..=TEAMS {
        for position in 1..=4 {
            for k in 0..2 {
                let id = element_id(team, position, k);
                let status = if id % 11 == 0 { "i" } else { "a" };
                elements.push(json!({
                    "id": id,
                    "web_name": format!("Player{id}"),
                    "team": team,
                    "element_type": position,
                    "now_cost": 40 + (id * 13) % 60,
                    "status": status,
                    "points_per_game": format!("{:.1}", ((id * 37) % 70) as f64 / 10.0),
                    "minutes": id * 20,
                }));
            }
        }
    }
    // no element_type: skipped by the loader
    elements.push(json!({"id": 999, "web_name": "Broken", "team": 1, "now_cost": 50, "points_per_game": "1.0"}));

    let teams: Vec<Value> = (1..=TEAMS)
        .map(|id| json!({"id": id, "name": format!("Club {id}"), "short_name": format!("C{id}")}))
        .collect();

    json!({"elements": elements, "teams": teams})
}

fn fixtures() -> Value {
    let rounds: [[(u32, u32); 3]; 3] = [[(1, 2), (3, 4), (5, 6)], [(2, 3), (4, 5), (6, 1)], [(1, 3), (2, 5), (4, 6)]];
    let mut list = Vec::new();
    for (r, pairs) in (0u32..).zip(rounds.iter()) {
        for &(home, away) in pairs {
            list.push(json!({
                "event": r + 1,
                "team_h": home,
                "team_a": away,
                "team_h_difficulty": 1 + (home + r) % 5,
                "team_a_difficulty": 1 + (away + 2 * r) % 5,
            }));
        }
    }
    list.push(json!({"event": null, "team_h": 1, "team_a": 4, "team_h_difficulty": 3, "team_a_difficulty": 3}));
    Value::Array(list)
}

fn picks() -> Value {
    let mut ids = vec![element_id(1, 1, 0), element_id(2, 1, 0)];
    ids.extend((1..=5).map(|t| element_id(t, 2, 0)));
    ids.extend((2..=6).map(|t| element_id(t, 3, 0)));
    ids.extend((4..=6).map(|t| element_id(t, 4, 1)));
    let picks: Vec<Value> = ids.into_iter().map(|id| json!({"element": id})).collect();
    json!({"picks": picks, "entry_history": {"bank": 10, "value": 1000}})
}

fn write(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn data_dir(with_picks: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), BOOTSTRAP_FILE, &bootstrap());
    write(dir.path(), FIXTURES_FILE, &fixtures());
    if with_picks {
        write(dir.path(), PICKS_FILE, &picks());
    }
    dir
}

#[test]
fn test_advice_report_end_to_end() {
    let dir = data_dir(true);
    let input = load_input(dir.path(), None).unwrap();

    assert_eq!(input.snapshot.len(), 15);
    assert_eq!(input.stats.players.skipped, 1);
    assert_eq!(input.stats.unscheduled_fixtures, 1);
    assert_eq!(input.data.fixtures().len(), 9);

    let config = AdvisorConfig::default();
    let round = resolve_round(Some(3), &input);
    let report = build_report(&input, round, &config, &Section::ADVICE).unwrap();

    let targets = report.targets.as_ref().unwrap();
    assert_eq!(targets.len(), 5);
    assert!(targets.iter().all(|t| !input.snapshot.owns(t.id)));
    assert!(targets.windows(2).all(|w| w[0].score >= w[1].score));

    let team = report.team.as_ref().unwrap();
    assert_eq!(team.len(), 15);
    assert!(team.windows(2).all(|w| w[0].position <= w[1].position));
    assert_eq!(team[0].position, Position::Goalkeeper);

    let swaps = report.swaps.as_ref().unwrap();
    assert!(swaps.swaps.len() <= config.max_transfers);
    assert!(swaps.bank_after >= 0);

    assert!(report.chip.is_some());
    assert!(report.wildcard.is_none());
    assert_eq!(report.issues.missing_data, 1);

    let text = render(&report, OutputFormat::Text).unwrap();
    assert!(text.contains("Top transfer targets based on form and upcoming fixtures:"));
    assert!(text.contains("Your current squad (sorted by position):"));
    assert!(text.contains("Chip recommendation:"));
}

#[test]
fn test_wildcard_build_end_to_end() {
    let dir = data_dir(true);
    let input = load_input(dir.path(), None).unwrap();
    let report = build_report(&input, 3, &AdvisorConfig::long_horizon(), &[Section::Wildcard]).unwrap();

    let build = report.wildcard.as_ref().unwrap();
    assert_eq!(build.total_budget, 1010);
    assert!(build.spent <= build.total_budget);
    assert!(build.count(Position::Goalkeeper) <= 2);
    assert!(build.count(Position::Forward) <= 3);

    let csv = render(&report, OutputFormat::Csv).unwrap();
    assert!(csv.starts_with("section,rank,id,name,team,position,price,form,minutes,difficulty,score,fixtures"));
    assert_eq!(csv.lines().count(), build.picks.len() + 1);
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = data_dir(true);
    let config = AdvisorConfig::default();

    let first = build_report(&load_input(dir.path(), None).unwrap(), 2, &config, &Section::ADVICE).unwrap();
    let mut second = build_report(&load_input(dir.path(), None).unwrap(), 2, &config, &Section::ADVICE).unwrap();
    second.generated_at = first.generated_at.clone();
    assert_eq!(first, second);

    let json = render(&first, OutputFormat::Json).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["fingerprint"].as_str().unwrap().len(), 64);
    assert!(value["generated_at"].as_str().is_some());
}

#[test]
fn test_fingerprint_tracks_input_changes() {
    let dir = data_dir(true);
    let before = load_input(dir.path(), None).unwrap().fingerprint;

    let mut changed = picks();
    changed["entry_history"]["bank"] = json!(0);
    write(dir.path(), PICKS_FILE, &changed);
    let after = load_input(dir.path(), None).unwrap().fingerprint;

    assert_ne!(before, after);
}

#[test]
fn test_missing_default_picks_means_empty_roster() {
    let dir = data_dir(false);
    let input = load_input(dir.path(), None).unwrap();
    assert!(input.snapshot.is_empty());

    let report = build_report(&input, 1, &AdvisorConfig::default(), &Section::ADVICE).unwrap();
    assert_eq!(report.targets.map(|t| t.len()), Some(5));
    assert_eq!(report.team.map(|t| t.len()), Some(0));
    assert_eq!(report.swaps.map(|s| s.swaps.len()), Some(0));
}

#[test]
fn test_missing_documents_are_errors() {
    let dir = data_dir(false);
    assert!(load_input(dir.path(), Some(&dir.path().join("nope.json"))).is_err());

    let empty = TempDir::new().unwrap();
    assert!(load_input(empty.path(), None).is_err());
}
