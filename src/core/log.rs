//! Append-only match event log.
//!
//! The log is immutable: `record` returns a new log with the event added,
//! leaving the original untouched.

use super::event::Event;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ordered log of match events, oldest first.
///
/// A log always begins with the start event it was created with. Events are
/// never reordered or pruned.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::{Event, EventLog, Score, Side};
/// use chrono::{Duration, Utc};
///
/// let kickoff = Utc::now();
/// let log = EventLog::new(Event::start("Game starts!", kickoff));
///
/// let log = log.record(Event::scored(
///     Side::Away,
///     "Finland scores!",
///     Score::new(0, 1),
///     kickoff,
///     kickoff + Duration::seconds(30),
/// ));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.lines(), vec![
///     "00:00 : Game starts!".to_string(),
///     "00:30 : Finland scores! (0 – 1)".to_string(),
/// ]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a log holding only the start event.
    pub fn new(start: Event) -> Self {
        Self {
            events: vec![start],
        }
    }

    /// Record an event, returning a new log.
    ///
    /// This does not mutate the existing log.
    ///
    /// ```rust
    /// use scoreboard::core::{Event, EventLog, Score, Side};
    /// use chrono::Utc;
    ///
    /// let now = Utc::now();
    /// let log = EventLog::new(Event::start("Game starts!", now));
    /// let goal = Event::scored(Side::Home, "France scores!", Score::new(1, 0), now, now);
    ///
    /// let new_log = log.record(goal);
    /// assert_eq!(new_log.len(), 2);
    /// assert_eq!(log.len(), 1); // Original unchanged
    /// ```
    pub fn record(&self, event: Event) -> Self {
        let mut events = self.events.clone();
        events.push(event);
        Self { events }
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Most recent event.
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of goals recorded (every event except the start).
    pub fn goals(&self) -> usize {
        self.events.iter().filter(|e| !e.is_start()).count()
    }

    /// Rendered text of every event, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Match time covered by the log: elapsed time of the latest event.
    pub fn duration(&self) -> Duration {
        self.last().map_or(Duration::ZERO, |e| e.elapsed)
    }
}
