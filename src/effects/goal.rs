//! Goal pipeline: build a goal as an effect, then commit it to the store.

use crate::core::{Clock, Score, Side};
use crate::store::MatchStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::warn;

/// Errors that can occur when committing a goal
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("Stale goal for {side}: expected score {expected}, goal carries {found}")]
    StaleGoal {
        side: Side,
        expected: Score,
        found: Score,
    },

    #[error("Goal at {goal} precedes the last logged event at {last}")]
    OutOfOrder {
        goal: DateTime<Utc>,
        last: DateTime<Utc>,
    },
}

/// Environment the goal effect runs against.
#[derive(Clone, Debug)]
pub struct ScoringEnv {
    clock: Arc<dyn Clock>,
}

impl ScoringEnv {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

/// A goal for one side, stamped with the score it expects to produce.
///
/// The goal carries no message or elapsed time: the store that commits it
/// builds the log event from its own teams and start time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Goal {
    side: Side,
    score: Score,
    timestamp: DateTime<Utc>,
}

impl Goal {
    pub fn side(&self) -> Side {
        self.side
    }

    /// Score right after this goal.
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl MatchStore {
    /// Build a goal for `side` against the current score.
    ///
    /// The returned effect reads the time from its environment and yields
    /// the goal without touching the store. Commit it with
    /// [`apply_goal`](Self::apply_goal).
    pub fn goal(&self, side: Side) -> impl Effect<Output = Goal, Error = ScoreError, Env = ScoringEnv> {
        let score = self.score().increment(side);

        from_fn(|env: &ScoringEnv| Ok::<DateTime<Utc>, ScoreError>(env.now()))
            .map(move |timestamp| Goal {
                side,
                score,
                timestamp,
            })
            .boxed()
    }

    /// Commit a goal produced by [`goal`](Self::goal).
    ///
    /// The goal is rejected if another increment landed after it was built
    /// (its score is no longer the current score plus one), or if it is
    /// timestamped before the last logged event.
    pub fn apply_goal(&mut self, goal: Goal) -> Result<Score, ScoreError> {
        let expected = self.score().increment(goal.side);
        if goal.score != expected {
            warn!(side = %goal.side, %expected, found = %goal.score, "rejected stale goal");
            return Err(ScoreError::StaleGoal {
                side: goal.side,
                expected,
                found: goal.score,
            });
        }

        if let Some(last) = self.log().last() {
            if goal.timestamp < last.timestamp {
                warn!(goal = %goal.timestamp, last = %last.timestamp, "rejected out-of-order goal");
                return Err(ScoreError::OutOfOrder {
                    goal: goal.timestamp,
                    last: last.timestamp,
                });
            }
        }

        let event = self.goal_event(goal.side, goal.score, goal.timestamp);
        Ok(self.commit(event))
    }
}
