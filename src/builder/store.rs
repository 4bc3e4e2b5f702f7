//! Builder for constructing match stores.

use crate::builder::error::BuildError;
use crate::core::{Clock, Side, SystemClock, Team};
use crate::store::{MatchStore, START_MESSAGE};
use std::sync::Arc;

/// Builder for constructing a [`MatchStore`] with a fluent API.
///
/// Every field is optional; unset fields fall back to France vs. Finland,
/// the default start message and the system clock.
pub struct MatchBuilder {
    home: Option<Team>,
    away: Option<Team>,
    start_message: Option<String>,
    clock: Option<Arc<dyn Clock>>,
}

impl MatchBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            home: None,
            away: None,
            start_message: None,
            clock: None,
        }
    }

    /// Set the home (left) team.
    pub fn home(mut self, team: Team) -> Self {
        self.home = Some(team);
        self
    }

    /// Set the away (right) team.
    pub fn away(mut self, team: Team) -> Self {
        self.away = Some(team);
        self
    }

    /// Set the message of the first log line.
    pub fn start_message(mut self, message: impl Into<String>) -> Self {
        self.start_message = Some(message.into());
        self
    }

    /// Set the time source.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the store. The match clock starts now.
    pub fn build(self) -> Result<MatchStore, BuildError> {
        let home = self.home.unwrap_or_else(Team::france);
        let away = self.away.unwrap_or_else(Team::finland);

        for (side, team) in [(Side::Home, &home), (Side::Away, &away)] {
            if team.name().trim().is_empty() {
                return Err(BuildError::EmptyTeamName { side: side.name() });
            }
            if !team.has_valid_country_code() {
                return Err(BuildError::InvalidCountryCode {
                    team: team.name().to_string(),
                    code: team.country_code().to_string(),
                });
            }
        }

        if home.name() == away.name() {
            return Err(BuildError::DuplicateTeam(home.name().to_string()));
        }

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let start_message = self
            .start_message
            .unwrap_or_else(|| START_MESSAGE.to_string());

        Ok(MatchStore::from_parts(home, away, start_message, clock))
    }
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
