//! Builder API for match construction.
//!
//! [`MatchStore::new`](crate::store::MatchStore::new) covers the fixed
//! France vs. Finland match. The builder is for everything else: other
//! teams, another start message, or a controllable clock.
//!
//! # Example
//!
//! ```
//! use scoreboard::builder::MatchBuilder;
//! use scoreboard::core::{Side, Team};
//!
//! let mut store = MatchBuilder::new()
//!     .home(Team::new("Sweden", "SE"))
//!     .away(Team::new("Denmark", "DK"))
//!     .build()
//!     .unwrap();
//!
//! store.increment(Side::Home);
//! assert!(store.state().events[1].contains("Sweden scores! (1 – 0)"));
//! ```

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::MatchBuilder;
