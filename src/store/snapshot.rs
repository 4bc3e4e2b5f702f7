//! Read-only view of the match state.

use crate::core::{Score, Side};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the match: both scores and the rendered log.
///
/// Snapshots are detached copies. Later increments do not change a
/// snapshot already handed out.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub home: u32,
    pub away: u32,
    pub events: Vec<String>,
}

impl MatchSnapshot {
    pub fn score(&self) -> Score {
        Score::new(self.home, self.away)
    }

    pub fn goals(&self, side: Side) -> u32 {
        self.score().get(side)
    }

    /// Serialize the snapshot as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
