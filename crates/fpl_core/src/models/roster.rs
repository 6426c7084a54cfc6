use super::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A manager's picks for one round, as reported by the picks provider.
///
/// Treated as an immutable snapshot; recommendation passes copy what they
/// need into their own state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterSnapshot {
    pub owned: BTreeSet<PlayerId>,
    /// Money in the bank, tenths.
    pub bank: u32,
    /// Current selling value of the squad, tenths.
    pub value: u32,
}

impl RosterSnapshot {
    /// Duplicate ids collapse into one.
    pub fn new(owned: impl IntoIterator<Item = PlayerId>, bank: u32, value: u32) -> Self {
        Self { owned: owned.into_iter().collect(), bank, value }
    }

    pub fn owns(&self, id: PlayerId) -> bool {
        self.owned.contains(&id)
    }

    /// Bank plus squad value; only the squad builder uses this.
    pub fn total_budget(&self) -> u32 {
        self.bank.saturating_add(self.value)
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}
