// Pending-request markers for coalescing duplicate fetches.
// The first caller for a key leads; later callers wait on its outcome.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;

use super::Lookup;

type Outcome = Option<Lookup>;

#[derive(Debug, Default)]
pub(crate) struct InFlight {
    pending: Mutex<HashMap<String, watch::Receiver<Outcome>>>,
}

/// Role of a caller that joined the in-flight table.
pub(crate) enum Slot<'a> {
    /// No fetch running for this key; this caller performs it.
    Leader(Leader<'a>),
    /// Another caller is fetching; wait for its outcome.
    Follower(watch::Receiver<Outcome>),
}

impl InFlight {
    pub(crate) fn join(&self, key: &str) -> Slot<'_> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(rx) = pending.get(key) {
            return Slot::Follower(rx.clone());
        }

        let (tx, rx) = watch::channel(None);
        pending.insert(key.to_string(), rx);
        Slot::Leader(Leader {
            key: key.to_string(),
            tx,
            inflight: self,
        })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Marker held by the caller performing the fetch.
///
/// Dropping it clears the marker, so a cancelled leader never strands
/// followers: their wait ends with no outcome and they fetch themselves.
pub(crate) struct Leader<'a> {
    key: String,
    tx: watch::Sender<Outcome>,
    inflight: &'a InFlight,
}

impl Leader<'_> {
    /// Publish the outcome to waiting followers.
    pub(crate) fn complete(self, lookup: &Lookup) {
        // No receivers left is fine
        let _ = self.tx.send(Some(lookup.clone()));
    }
}

impl Drop for Leader<'_> {
    fn drop(&mut self) {
        self.inflight
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

/// Wait for the leader's outcome. `None` if it went away without one.
pub(crate) async fn wait(mut rx: watch::Receiver<Outcome>) -> Option<Lookup> {
    match rx.wait_for(Option::is_some).await {
        Ok(outcome) => outcome.clone(),
        Err(_) => None,
    }
}
