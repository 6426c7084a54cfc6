//! Report rendering: plain text tables, JSON, or CSV.

use crate::report::Report;
use anyhow::{anyhow, Context, Result};
use fpl_core::{Availability, ChipAssessment, ScoredCandidate, SquadBuild, SquadEntry, SwapPlan};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown format '{other}' (expected text, json or csv)")),
        }
    }
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).context("Failed to serialize report"),
        OutputFormat::Csv => render_csv(report),
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

fn status_label(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "available",
        Availability::Unavailable => "out",
    }
}

fn candidate_table(f: &mut fmt::Formatter, rows: &[ScoredCandidate]) -> fmt::Result {
    writeln!(
        f,
        "{:>3}  {:<18} {:<4} {:<4} {:>6} {:>5} {:>5} {:>7}  {}",
        "#", "Name", "Team", "Pos", "Price", "Form", "FDR", "Score", "Next fixtures"
    )?;
    for c in rows {
        writeln!(
            f,
            "{:>3}  {:<18} {:<4} {:<4} {:>6.1} {:>5.1} {:>5.2} {:>7.3}  {}",
            c.rank, c.name, c.team_code, c.position_label, c.price, c.form, c.difficulty, c.score, c.fixtures
        )?;
    }
    Ok(())
}

fn squad_table(f: &mut fmt::Formatter, rows: &[SquadEntry]) -> fmt::Result {
    writeln!(f, "{:<18} {:<4} {:<4} {:>6} {:>5} {:>7}  {}", "Name", "Team", "Pos", "Price", "Form", "Minutes", "Status")?;
    for e in rows {
        writeln!(
            f,
            "{:<18} {:<4} {:<4} {:>6.1} {:>5.1} {:>7}  {}",
            e.name,
            e.team_code,
            e.position.label(),
            e.price,
            e.form,
            e.minutes,
            status_label(e.availability)
        )?;
    }
    Ok(())
}

fn swap_lines(f: &mut fmt::Formatter, plan: &SwapPlan) -> fmt::Result {
    if plan.is_empty() {
        return writeln!(f, "No sensible transfer moves found within your budget.");
    }
    writeln!(f, "Suggested transfer moves (sell → buy, budget impact):")?;
    for swap in &plan.swaps {
        writeln!(f, " - {} → {} {}", swap.sell_name, swap.buy_name, swap.impact_label())?;
    }
    Ok(())
}

fn wildcard_lines(f: &mut fmt::Formatter, build: &SquadBuild) -> fmt::Result {
    if build.is_empty() {
        return writeln!(f, "Unable to construct a wildcard squad within your budget and constraints.");
    }
    writeln!(f, "Proposed wildcard squad (sorted by position):")?;
    candidate_table(f, &build.picks)?;
    writeln!(f, "\n{}", build.budget_summary())
}

fn chip_lines(f: &mut fmt::Formatter, chip: &ChipAssessment) -> fmt::Result {
    match chip.advice {
        Some(advice) => writeln!(f, "Chip recommendation: consider playing your {} chip.", advice.name())?,
        None => writeln!(f, "Chip recommendation: none this round.")?,
    }
    writeln!(f, "({} unavailable, average upcoming difficulty {:.2})", chip.unavailable, chip.average_difficulty)
}

/// Plain text view of a report, one block per computed section.
pub struct TextReport<'a>(pub &'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.0;

        if let Some(targets) = &report.targets {
            writeln!(f, "Top transfer targets based on form and upcoming fixtures:")?;
            candidate_table(f, targets)?;
            writeln!(f)?;
        }
        if let Some(team) = &report.team {
            writeln!(f, "Your current squad (sorted by position):")?;
            squad_table(f, team)?;
            writeln!(f)?;
        }
        if let Some(plan) = &report.swaps {
            swap_lines(f, plan)?;
            writeln!(f)?;
        }
        if let Some(chip) = &report.chip {
            chip_lines(f, chip)?;
            writeln!(f)?;
        }
        if let Some(build) = &report.wildcard {
            wildcard_lines(f, build)?;
            writeln!(f)?;
        }

        if !report.issues.is_clean() {
            writeln!(f, "Note: {} input records were excluded from the analysis.", report.issues.total())?;
        }
        Ok(())
    }
}

pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CandidateRow<'a> {
    section: &'a str,
    rank: usize,
    id: u32,
    name: &'a str,
    team: &'a str,
    position: &'a str,
    price: f64,
    form: f64,
    minutes: u32,
    difficulty: f64,
    score: f64,
    fixtures: String,
}

impl<'a> CandidateRow<'a> {
    fn new(section: &'a str, c: &'a ScoredCandidate) -> Self {
        Self {
            section,
            rank: c.rank,
            id: c.id,
            name: &c.name,
            team: &c.team_code,
            position: &c.position_label,
            price: c.price,
            form: c.form,
            minutes: c.minutes,
            difficulty: c.difficulty,
            score: c.score,
            fixtures: c.fixture_summary(),
        }
    }
}

#[derive(Serialize)]
struct SquadRow<'a> {
    id: u32,
    name: &'a str,
    team: &'a str,
    position: &'a str,
    price: f64,
    form: f64,
    minutes: u32,
    status: &'a str,
}

#[derive(Serialize)]
struct SwapRow<'a> {
    sell_id: u32,
    sell: &'a str,
    buy_id: u32,
    buy: &'a str,
    cost_delta: f64,
    impact: String,
}

#[derive(Serialize)]
struct ChipRow {
    unavailable: usize,
    average_difficulty: f64,
    advice: &'static str,
}

/// Serializes one table; each section becomes its own block with a header.
fn csv_block<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).context("Failed to write CSV row")?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

pub fn render_csv(report: &Report) -> Result<String> {
    let mut blocks = Vec::new();

    if let Some(targets) = &report.targets {
        blocks.push(csv_block(targets.iter().map(|c| CandidateRow::new("targets", c)))?);
    }
    if let Some(team) = &report.team {
        blocks.push(csv_block(team.iter().map(|e| SquadRow {
            id: e.id,
            name: &e.name,
            team: &e.team_code,
            position: e.position.label(),
            price: e.price,
            form: e.form,
            minutes: e.minutes,
            status: status_label(e.availability),
        }))?);
    }
    if let Some(plan) = &report.swaps {
        blocks.push(csv_block(plan.swaps.iter().map(|s| SwapRow {
            sell_id: s.sell_id,
            sell: &s.sell_name,
            buy_id: s.buy_id,
            buy: &s.buy_name,
            cost_delta: fpl_core::models::currency::to_display(s.cost_delta),
            impact: s.impact_label(),
        }))?);
    }
    if let Some(chip) = &report.chip {
        blocks.push(csv_block([ChipRow {
            unavailable: chip.unavailable,
            average_difficulty: chip.average_difficulty,
            advice: chip.advice.map(|c| c.name()).unwrap_or("none"),
        }])?);
    }
    if let Some(build) = &report.wildcard {
        blocks.push(csv_block(build.picks.iter().map(|c| CandidateRow::new("wildcard", c)))?);
    }

    Ok(blocks.join("\n"))
}
