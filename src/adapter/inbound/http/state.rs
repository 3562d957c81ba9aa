//! Shared handler state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// State handed to every handler: the store behind the ports and a request
/// counter used to tag log spans.
pub struct AppState<S> {
    store: Arc<S>,
    request_seq: Arc<AtomicU64>,
}

impl<S> AppState<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            request_seq: Arc::new(AtomicU64::new(1)),
        }
    }

    /// The store implementing the persistence ports.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Next request id, unique for the lifetime of the process.
    pub(crate) fn next_request_id(&self) -> u64 {
        self.request_seq.fetch_add(1, Ordering::Relaxed)
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            request_seq: Arc::clone(&self.request_seq),
        }
    }
}
