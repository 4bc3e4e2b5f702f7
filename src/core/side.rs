//! Match participants.
//!
//! A match always has exactly two sides. Identity is a closed enumeration,
//! so an increment can never name a participant that does not exist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two competing sides.
///
/// `Home` is displayed on the left, `Away` on the right.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::Side;
///
/// assert_eq!(Side::Home.other(), Side::Away);
/// assert_eq!(Side::ALL, [Side::Home, Side::Away]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Both sides in display order.
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    /// Get the side's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Away => "Away",
        }
    }

    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display identity of a team.
///
/// The flag is derived from the two-letter ISO 3166 country code as a pair
/// of regional indicator symbols.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::Team;
///
/// let france = Team::france();
/// assert_eq!(france.name(), "France");
/// assert_eq!(france.flag(), "🇫🇷");
/// assert_eq!(france.score_message(), "France scores!");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Team {
    name: String,
    country_code: String,
}

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

impl Team {
    /// Create a team from its display name and country code.
    ///
    /// The code is stored upper-cased. Validation happens in
    /// [`MatchBuilder::build`](crate::builder::MatchBuilder::build).
    pub fn new(name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country_code: country_code.into().to_ascii_uppercase(),
        }
    }

    /// The default home team.
    pub fn france() -> Self {
        Self::new("France", "FR")
    }

    /// The default away team.
    pub fn finland() -> Self {
        Self::new("Finland", "FI")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Check that the country code is exactly two ASCII letters.
    pub fn has_valid_country_code(&self) -> bool {
        self.country_code.len() == 2 && self.country_code.chars().all(|c| c.is_ascii_uppercase())
    }

    /// Emoji flag for the country code.
    ///
    /// Characters that are not ASCII letters are skipped, so an invalid
    /// code yields a partial (or empty) flag rather than garbage.
    pub fn flag(&self) -> String {
        self.country_code
            .chars()
            .filter(|c| c.is_ascii_uppercase())
            .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32)))
            .collect()
    }

    /// Log message recorded when this team scores.
    pub fn score_message(&self) -> String {
        format!("{} scores!", self.name)
    }
}
