//! Match events and their text rendering.

use super::score::Score;
use super::side::Side;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// What an event records.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EventKind {
    /// The match started. Always the first event in a log.
    Start,
    /// A side scored; `score` is the score right after the goal.
    Scored { side: Side, score: Score },
}

/// Immutable record of one line in the match log.
///
/// Scored events render as `"mm:ss : <description> (<home> – <away>)"`.
/// The start event renders as `"00:00 : <description>"`.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::{Event, Score, Side};
/// use chrono::{Duration, Utc};
///
/// let kickoff = Utc::now();
/// let start = Event::start("Game starts!", kickoff);
/// assert_eq!(start.to_string(), "00:00 : Game starts!");
///
/// let goal = Event::scored(
///     Side::Home,
///     "France scores!",
///     Score::new(1, 0),
///     kickoff,
///     kickoff + Duration::seconds(75),
/// );
/// assert_eq!(goal.to_string(), "01:15 : France scores! (1 – 0)");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    /// Time since the match started
    pub elapsed: Duration,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl Event {
    /// The match start event.
    pub fn start(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: EventKind::Start,
            elapsed: Duration::ZERO,
            timestamp,
            description: message.into(),
        }
    }

    /// A goal event.
    ///
    /// Elapsed time is measured from `started_at` to `now`; a `now` earlier
    /// than `started_at` counts as zero.
    pub fn scored(
        side: Side,
        message: impl Into<String>,
        score: Score,
        started_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: EventKind::Scored { side, score },
            elapsed: now
                .signed_duration_since(started_at)
                .to_std()
                .unwrap_or(Duration::ZERO),
            timestamp: now,
            description: message.into(),
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self.kind, EventKind::Start)
    }

    /// Side that scored, if this is a goal.
    pub fn side(&self) -> Option<Side> {
        match self.kind {
            EventKind::Start => None,
            EventKind::Scored { side, .. } => Some(side),
        }
    }

    /// Score snapshot carried by a goal.
    pub fn score(&self) -> Option<Score> {
        match self.kind {
            EventKind::Start => None,
            EventKind::Scored { score, .. } => Some(score),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::Start => write!(f, "00:00 : {}", self.description),
            EventKind::Scored { score, .. } => write!(
                f,
                "{} : {} ({})",
                format_elapsed(self.elapsed),
                self.description,
                score
            ),
        }
    }
}

/// Format a duration as zero-padded `mm:ss`.
///
/// Sub-second precision is truncated, never rounded. Minutes keep counting
/// past 59, so the formatted time never goes backwards.
///
/// ```rust
/// use scoreboard::core::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:59");
/// assert_eq!(format_elapsed(Duration::from_secs(61 * 60 + 5)), "61:05");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn kickoff() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn start_event_has_no_score() {
        let event = Event::start("Game starts!", kickoff());
        assert!(event.is_start());
        assert_eq!(event.side(), None);
        assert_eq!(event.score(), None);
        assert_eq!(event.elapsed, Duration::ZERO);
    }

    #[test]
    fn start_event_always_renders_zero() {
        let mut event = Event::start("Game starts!", kickoff());
        event.elapsed = Duration::from_secs(42);
        assert_eq!(event.to_string(), "00:00 : Game starts!");
    }

    #[test]
    fn scored_event_renders_snapshot() {
        let event = Event::scored(
            Side::Away,
            "Finland scores!",
            Score::new(0, 1),
            kickoff(),
            kickoff() + ChronoDuration::seconds(5),
        );
        assert_eq!(event.to_string(), "00:05 : Finland scores! (0 – 1)");
        assert_eq!(event.side(), Some(Side::Away));
        assert_eq!(event.score(), Some(Score::new(0, 1)));
    }

    #[test]
    fn scored_before_start_counts_as_zero() {
        let event = Event::scored(
            Side::Home,
            "France scores!",
            Score::new(1, 0),
            kickoff(),
            kickoff() - ChronoDuration::seconds(3),
        );
        assert_eq!(event.elapsed, Duration::ZERO);
    }

    #[test]
    fn format_truncates_instead_of_rounding() {
        assert_eq!(format_elapsed(Duration::from_millis(999)), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(1_999)), "00:01");
        assert_eq!(format_elapsed(Duration::from_millis(119_999)), "01:59");
    }

    #[test]
    fn format_pads_and_keeps_counting_minutes() {
        assert_eq!(format_elapsed(Duration::from_secs(9)), "00:09");
        assert_eq!(format_elapsed(Duration::from_secs(10 * 60)), "10:00");
        assert_eq!(format_elapsed(Duration::from_secs(59 * 60 + 59)), "59:59");
        assert_eq!(format_elapsed(Duration::from_secs(60 * 60)), "60:00");
        assert_eq!(format_elapsed(Duration::from_secs(125 * 60 + 7)), "125:07");
    }

    #[test]
    fn event_serializes_correctly() {
        let event = Event::scored(
            Side::Home,
            "France scores!",
            Score::new(1, 0),
            kickoff(),
            kickoff() + ChronoDuration::milliseconds(1_250),
        );
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
