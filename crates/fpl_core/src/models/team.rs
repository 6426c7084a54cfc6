use super::TeamId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Three-letter code used in fixture summaries (e.g. "ARS").
    pub short_name: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self { id, name: name.into(), short_name: short_name.into() }
    }
}
