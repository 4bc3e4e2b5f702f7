//! Build errors for the match builder.

use thiserror::Error;

/// Errors that can occur when building a match store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Team name for {side} is empty")]
    EmptyTeamName { side: &'static str },

    #[error("Country code '{code}' for team '{team}' is not two ASCII letters")]
    InvalidCountryCode { team: String, code: String },

    #[error("Both sides are named '{0}'. Teams must be distinguishable")]
    DuplicateTeam(String),
}
