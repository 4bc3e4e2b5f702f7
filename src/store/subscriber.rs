//! Change notification for store observers.

use super::snapshot::MatchSnapshot;
use serde::{Deserialize, Serialize};

/// Handle returned by [`MatchStore::subscribe`](super::MatchStore::subscribe).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SubscriptionId(pub(crate) u64);

/// Callback invoked with the new snapshot after every increment.
///
/// # Example
///
/// ```rust
/// use scoreboard::store::{MatchSnapshot, Subscriber};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let renders = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&renders);
/// let subscriber = Subscriber::new(move |_: &MatchSnapshot| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// subscriber.notify(&MatchSnapshot::default());
/// assert_eq!(renders.load(Ordering::SeqCst), 1);
/// ```
pub struct Subscriber {
    callback: Box<dyn Fn(&MatchSnapshot) + Send + Sync>,
}

impl Subscriber {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&MatchSnapshot) + Send + Sync + 'static,
    {
        Subscriber {
            callback: Box::new(callback),
        }
    }

    pub fn notify(&self, snapshot: &MatchSnapshot) {
        (self.callback)(snapshot)
    }
}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber").finish_non_exhaustive()
    }
}
