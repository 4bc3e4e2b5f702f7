//! Effectful goal pipeline using Stillwater 0.11.0.
//!
//! This is the "imperative shell" variant of [`MatchStore::increment`]:
//! building a goal reads the clock from an environment inside an effect,
//! and committing it is a separate, validated step.
//!
//! # Key Concepts
//!
//! - **Goal**: an event built against a specific score, not yet committed
//! - **ScoringEnv**: the environment supplying the clock
//! - **apply_goal**: commits a goal only if no other increment landed first,
//!   so every logged snapshot matches the increment that produced it
//!
//! [`MatchStore::increment`]: crate::store::MatchStore::increment

mod goal;

pub use goal::{Goal, ScoreError, ScoringEnv};
