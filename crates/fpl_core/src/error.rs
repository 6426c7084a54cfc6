use thiserror::Error;

/// Caller errors detected before any computation starts.
///
/// Data quality problems are not errors; they are counted in
/// [`DataIssues`](crate::models::DataIssues). Infeasible budgets and empty
/// candidate pools are normal outcomes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid difficulty window: {0} rounds (must be at least 1)")]
    InvalidWindow(u32),

    #[error("Invalid fixture summary length: {0} (must be at least 1)")]
    InvalidSummaryLength(usize),

    #[error("Invalid quota for {position}: {quota} (must be at least 1)")]
    InvalidQuota { position: &'static str, quota: u8 },

    #[error("Invalid per-team cap: {0} (must be at least 1)")]
    InvalidTeamCap(u8),

    #[error("Invalid difficulty threshold: {0}")]
    InvalidDifficultyThreshold(f64),

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
