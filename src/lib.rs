//! Scoreboard: a two-team match scoreboard with a timestamped event log.
//!
//! The match state is a score for two fixed sides plus an append-only log
//! of human-readable events. The only way to change it is to record a goal,
//! which bumps one counter and logs the goal with the score right after it.
//!
//! # Core Concepts
//!
//! - **Side**: closed enumeration of the two participants
//! - **Event**: immutable log line, `"mm:ss : <message> (<home> – <away>)"`
//! - **MatchStore**: sole owner of the mutable match, notifies subscribers
//! - **Goal pipeline**: effect-based variant of an increment (see [`effects`])
//! - **ScoreboardView**: text rendering and the two controls
//!
//! # Example
//!
//! ```rust
//! use scoreboard::core::{ManualClock, Side};
//! use scoreboard::store::MatchStore;
//! use chrono::Duration;
//! use std::sync::Arc;
//!
//! let clock = ManualClock::default();
//! let mut store = MatchStore::with_clock(Arc::new(clock.clone()));
//!
//! clock.advance(Duration::seconds(83));
//! store.increment(Side::Away);
//!
//! assert_eq!(
//!     store.state().events,
//!     vec![
//!         "00:00 : Game starts!".to_string(),
//!         "01:23 : Finland scores! (0 – 1)".to_string(),
//!     ]
//! );
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use builder::{BuildError, MatchBuilder};
pub use crate::core::{Event, EventLog, Score, Side, Team};
pub use effects::{Goal, ScoreError, ScoringEnv};
pub use store::{MatchSnapshot, MatchStore};
pub use view::{Control, ScoreboardView};
