//! Score tuple for the two sides.

use super::side::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Goals per side.
///
/// Scores are immutable values; [`Score::increment`] returns the next score
/// instead of mutating in place.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::{Score, Side};
///
/// let score = Score::default().increment(Side::Home);
/// assert_eq!(score.get(Side::Home), 1);
/// assert_eq!(score.to_string(), "1 – 0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Goals scored by one side.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Score after one more goal for `side`.
    ///
    /// Saturates at `u32::MAX`.
    pub fn increment(self, side: Side) -> Self {
        match side {
            Side::Home => Self {
                home: self.home.saturating_add(1),
                ..self
            },
            Side::Away => Self {
                away: self.away.saturating_add(1),
                ..self
            },
        }
    }

    /// Total goals in the match.
    pub fn total(&self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{2013} {}", self.home, self.away)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_score_is_nil_nil() {
        assert_eq!(Score::default(), Score::new(0, 0));
    }

    #[test]
    fn increment_touches_only_one_side() {
        let score = Score::new(2, 3);
        assert_eq!(score.increment(Side::Home), Score::new(3, 3));
        assert_eq!(score.increment(Side::Away), Score::new(2, 4));
        assert_eq!(score, Score::new(2, 3));
    }

    #[test]
    fn increment_saturates() {
        let score = Score::new(u32::MAX, 0);
        assert_eq!(score.increment(Side::Home).home, u32::MAX);
    }

    #[test]
    fn display_uses_en_dash() {
        assert_eq!(Score::new(1, 0).to_string(), "1 – 0");
    }

    #[test]
    fn total_counts_both_sides() {
        assert_eq!(Score::new(2, 1).total(), 3);
    }
}
