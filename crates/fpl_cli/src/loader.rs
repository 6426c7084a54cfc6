//! Saved API document loading.
//!
//! Raw documents → core models, with per-document parse statistics.
//! Records that lack a required field are skipped and counted here;
//! cross-record consistency checks happen later in `DataSet::new`.

use anyhow::{Context, Result};
use fpl_core::{Availability, DataSet, Fixture, Player, PlayerId, Position, RosterSnapshot, Team};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const BOOTSTRAP_FILE: &str = "bootstrap-static.json";
pub const FIXTURES_FILE: &str = "fixtures.json";
pub const PICKS_FILE: &str = "picks.json";

/// Parse statistics for one record list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseStats {
    pub total: usize,
    pub parsed: usize,
    pub skipped: usize,
}

impl ParseStats {
    fn record(&mut self, parsed: bool) {
        self.total += 1;
        if parsed {
            self.parsed += 1;
        } else {
            self.skipped += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadStats {
    pub players: ParseStats,
    pub teams: ParseStats,
    pub fixtures: ParseStats,
    /// Fixtures without a round yet; not counted as skipped.
    pub unscheduled_fixtures: usize,
    pub picks: ParseStats,
}

impl LoadStats {
    /// Records dropped for missing or malformed required fields.
    pub fn skipped(&self) -> usize {
        self.players.skipped + self.teams.skipped + self.fixtures.skipped + self.picks.skipped
    }
}

// ---------------------------------------------------------------------------
// Raw documents
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBootstrap {
    elements: Vec<RawElement>,
    teams: Vec<RawTeam>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawElement {
    id: Option<PlayerId>,
    web_name: Option<String>,
    team: Option<u32>,
    element_type: Option<u8>,
    now_cost: Option<u32>,
    status: Option<String>,
    /// Usually a decimal string ("4.5"), occasionally a number.
    points_per_game: Option<serde_json::Value>,
    minutes: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTeam {
    id: Option<u32>,
    name: Option<String>,
    short_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFixture {
    event: Option<u32>,
    team_h: Option<u32>,
    team_a: Option<u32>,
    team_h_difficulty: Option<i64>,
    team_a_difficulty: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPicks {
    picks: Vec<RawPick>,
    entry_history: Option<RawEntryHistory>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPick {
    element: Option<PlayerId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEntryHistory {
    bank: Option<u32>,
    value: Option<u32>,
}

fn parse_form(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

impl RawElement {
    fn into_player(self) -> Option<Player> {
        let id = self.id?;
        let form = self.points_per_game.as_ref().and_then(parse_form)?;
        Some(Player {
            id,
            name: self.web_name.unwrap_or_else(|| id.to_string()),
            team: self.team?,
            position: Position::from_code(self.element_type?)?,
            cost: self.now_cost?,
            availability: Availability::from_status(self.status.as_deref().unwrap_or_default()),
            form,
            minutes: self.minutes.unwrap_or(0),
        })
    }
}

impl RawTeam {
    fn into_team(self) -> Option<Team> {
        let id = self.id?;
        let name = self.name?;
        let short_name = self.short_name.unwrap_or_else(|| name.clone());
        Some(Team::new(id, name, short_name))
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Bootstrap {
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub player_stats: ParseStats,
    pub team_stats: ParseStats,
}

pub fn parse_bootstrap(json: &str) -> Result<Bootstrap> {
    let raw: RawBootstrap = serde_json::from_str(json).context("Failed to parse bootstrap document")?;

    let mut player_stats = ParseStats::default();
    let mut players = Vec::with_capacity(raw.elements.len());
    for element in raw.elements {
        let id = element.id;
        match element.into_player() {
            Some(player) => {
                player_stats.record(true);
                players.push(player);
            }
            None => {
                player_stats.record(false);
                warn!("Skipping element {:?}: missing or malformed required field", id);
            }
        }
    }

    let mut team_stats = ParseStats::default();
    let mut teams = Vec::with_capacity(raw.teams.len());
    for team in raw.teams {
        match team.into_team() {
            Some(team) => {
                team_stats.record(true);
                teams.push(team);
            }
            None => {
                team_stats.record(false);
                warn!("Skipping team without id or name");
            }
        }
    }

    Ok(Bootstrap { players, teams, player_stats, team_stats })
}

/// Returns scheduled fixtures, their stats, and the number of unscheduled ones.
pub fn parse_fixtures(json: &str) -> Result<(Vec<Fixture>, ParseStats, usize)> {
    let raw: Vec<RawFixture> = serde_json::from_str(json).context("Failed to parse fixtures document")?;

    let mut stats = ParseStats::default();
    let mut unscheduled = 0;
    let mut fixtures = Vec::with_capacity(raw.len());

    for f in raw {
        let Some(round) = f.event else {
            unscheduled += 1;
            continue;
        };
        let parsed = (|| {
            let home_difficulty = u8::try_from(f.team_h_difficulty?).ok()?;
            let away_difficulty = u8::try_from(f.team_a_difficulty?).ok()?;
            Some(Fixture::new(round, f.team_h?, f.team_a?, home_difficulty, away_difficulty))
        })();

        match parsed {
            Some(fixture) => {
                stats.record(true);
                fixtures.push(fixture);
            }
            None => {
                stats.record(false);
                warn!("Skipping fixture in round {}: missing teams or difficulty", round);
            }
        }
    }

    if unscheduled > 0 {
        debug!("{} fixtures have no round yet", unscheduled);
    }
    Ok((fixtures, stats, unscheduled))
}

pub fn parse_picks(json: &str) -> Result<(RosterSnapshot, ParseStats)> {
    let raw: RawPicks = serde_json::from_str(json).context("Failed to parse picks document")?;

    let mut stats = ParseStats::default();
    let mut owned = Vec::with_capacity(raw.picks.len());
    for pick in raw.picks {
        stats.record(pick.element.is_some());
        owned.extend(pick.element);
    }

    let history = raw.entry_history.unwrap_or_else(|| {
        warn!("Picks document has no entry_history; assuming an empty bank");
        RawEntryHistory::default()
    });

    let snapshot = RosterSnapshot::new(owned, history.bank.unwrap_or(0), history.value.unwrap_or(0));
    Ok((snapshot, stats))
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Everything one invocation reads, resolved to core models.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub data: DataSet,
    pub snapshot: RosterSnapshot,
    pub stats: LoadStats,
    /// SHA256 over every document read, hex.
    pub fingerprint: String,
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// SHA256 over the documents in order. Identical input gives an identical
/// fingerprint, so reports from repeated runs can be compared.
pub fn fingerprint(documents: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for doc in documents {
        hasher.update((doc.len() as u64).to_le_bytes());
        hasher.update(doc.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Loads `bootstrap-static.json` and `fixtures.json` from `data_dir`, plus a
/// picks document.
///
/// `picks` defaults to `<data_dir>/picks.json`. An explicit path must exist;
/// a missing default file gives an empty roster.
pub fn load_input(data_dir: &Path, picks: Option<&Path>) -> Result<LoadedInput> {
    let bootstrap_json = read_document(&data_dir.join(BOOTSTRAP_FILE))?;
    let fixtures_json = read_document(&data_dir.join(FIXTURES_FILE))?;

    let picks_path: PathBuf = picks.map(Path::to_path_buf).unwrap_or_else(|| data_dir.join(PICKS_FILE));
    let picks_json = if picks.is_some() || picks_path.exists() {
        Some(read_document(&picks_path)?)
    } else {
        warn!("No picks document at {}; using an empty roster", picks_path.display());
        None
    };

    let bootstrap = parse_bootstrap(&bootstrap_json)
        .with_context(|| format!("Invalid {}", data_dir.join(BOOTSTRAP_FILE).display()))?;
    let (fixtures, fixture_stats, unscheduled) = parse_fixtures(&fixtures_json)
        .with_context(|| format!("Invalid {}", data_dir.join(FIXTURES_FILE).display()))?;
    let (snapshot, pick_stats) = match &picks_json {
        Some(json) => parse_picks(json).with_context(|| format!("Invalid {}", picks_path.display()))?,
        None => (RosterSnapshot::default(), ParseStats::default()),
    };

    let mut documents = vec![bootstrap_json.as_str(), fixtures_json.as_str()];
    documents.extend(picks_json.as_deref());

    let stats = LoadStats {
        players: bootstrap.player_stats,
        teams: bootstrap.team_stats,
        fixtures: fixture_stats,
        unscheduled_fixtures: unscheduled,
        picks: pick_stats,
    };
    let data = DataSet::new(bootstrap.players, bootstrap.teams, fixtures);

    info!(
        "Loaded {} players, {} teams, {} fixtures, {} owned ({} records skipped)",
        data.players().len(),
        data.teams().len(),
        data.fixtures().len(),
        snapshot.len(),
        stats.skipped()
    );

    Ok(LoadedInput { data, snapshot, stats, fingerprint: fingerprint(&documents) })
}
