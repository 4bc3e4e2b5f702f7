//! Match state store.
//!
//! [`MatchStore`] owns the score and event log and is the only place they
//! change. Every increment bumps one side's counter, appends a goal event
//! carrying the post-increment score, and notifies subscribers.

mod snapshot;
mod subscriber;

pub use snapshot::MatchSnapshot;
pub use subscriber::{Subscriber, SubscriptionId};

use crate::core::{Clock, Event, EventLog, Score, Side, SystemClock, Team};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Message logged when the match starts.
pub const START_MESSAGE: &str = "Game starts!";

/// Owner of the single mutable match.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::Side;
/// use scoreboard::store::MatchStore;
///
/// let mut store = MatchStore::new();
/// store.increment(Side::Home);
///
/// let state = store.state();
/// assert_eq!((state.home, state.away), (1, 0));
/// assert_eq!(state.events.len(), 2);
/// assert!(state.events[1].ends_with(": France scores! (1 – 0)"));
/// ```
pub struct MatchStore {
    home: Team,
    away: Team,
    started_at: DateTime<Utc>,
    score: Score,
    log: EventLog,
    clock: Arc<dyn Clock>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl MatchStore {
    /// France vs. Finland on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// France vs. Finland on the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_parts(Team::france(), Team::finland(), START_MESSAGE, clock)
    }

    pub(crate) fn from_parts(
        home: Team,
        away: Team,
        start_message: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let started_at = clock.now();
        let log = EventLog::new(Event::start(start_message, started_at));
        debug!(home = home.name(), away = away.name(), %started_at, "match started");

        Self {
            home,
            away,
            started_at,
            score: Score::default(),
            log,
            clock,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Record one goal for `side`.
    ///
    /// Returns the score after the goal. The clock is never allowed to run
    /// backwards relative to the log: a reading earlier than the last event
    /// is clamped to that event's time.
    pub fn increment(&mut self, side: Side) -> Score {
        let now = match self.log.last() {
            Some(last) => self.clock.now().max(last.timestamp),
            None => self.clock.now(),
        };
        let event = self.goal_event(side, self.score.increment(side), now);
        self.commit(event)
    }

    /// Snapshot of the current scores and rendered log.
    pub fn state(&self) -> MatchSnapshot {
        MatchSnapshot {
            home: self.score.home,
            away: self.score.away,
            events: self.log.lines(),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Typed event records, oldest first.
    pub fn events(&self) -> &[Event] {
        self.log.events()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Register a callback run after every increment.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&MatchSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Subscriber::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn goal_event(&self, side: Side, score: Score, now: DateTime<Utc>) -> Event {
        Event::scored(
            side,
            self.team(side).score_message(),
            score,
            self.started_at,
            now,
        )
    }

    /// Apply a goal event built against the current score.
    ///
    /// Callers must have checked that the event's snapshot is the current
    /// score plus one on its side.
    pub(crate) fn commit(&mut self, event: Event) -> Score {
        if let Some(score) = event.score() {
            self.score = score;
        }
        let elapsed_ms = u64::try_from(event.elapsed.as_millis()).unwrap_or(u64::MAX);
        debug!(side = ?event.side(), score = %self.score, elapsed_ms, "goal recorded");
        self.log = self.log.record(event);
        self.notify();
        self.score
    }

    fn notify(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.state();
        for (_, subscriber) in &self.subscribers {
            subscriber.notify(&snapshot);
        }
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MatchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchStore")
            .field("home", &self.home)
            .field("away", &self.away)
            .field("started_at", &self.started_at)
            .field("score", &self.score)
            .field("log", &self.log)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
