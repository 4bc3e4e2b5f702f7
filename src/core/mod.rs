//! Core match types and logic.
//!
//! This module contains the pure part of the scoreboard:
//! - Participant identity via the closed `Side` enumeration
//! - Immutable `Score` values and `Event` records
//! - The append-only `EventLog`
//! - `Clock` sources for elapsed time
//!
//! Nothing in here mutates shared state; the store in [`crate::store`]
//! owns the single mutable match.

mod clock;
mod event;
mod log;
mod score;
mod side;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event::{format_elapsed, Event, EventKind};
pub use log::EventLog;
pub use score::Score;
pub use side::{Side, Team};
