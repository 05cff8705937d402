//! Single-slot in-flight refresh cell
//!
//! At most one refresh runs at a time per coordinator. The first caller that
//! needs a new token installs a shared future in the slot; every caller that
//! arrives while it is pending awaits a clone of that same future. The future
//! empties the slot as it settles, so the next 401 after completion starts a
//! fresh refresh.

use crate::traits::error::RefreshError;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// New access token, or why none could be obtained
pub type RefreshOutcome = std::result::Result<String, RefreshError>;

type PendingRefresh = Shared<BoxFuture<'static, RefreshOutcome>>;

/// Refresh state of one client session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Refreshing,
}

/// Coordinates token refreshes across concurrent callers
#[derive(Default)]
pub struct RefreshCoordinator {
    slot: Arc<Mutex<Option<PendingRefresh>>>,
    started: AtomicU64,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RefreshState {
        if self.slot.lock().is_some() {
            RefreshState::Refreshing
        } else {
            RefreshState::Idle
        }
    }

    /// Number of refreshes started by this coordinator
    pub fn refresh_count(&self) -> u64 {
        self.started.load(Ordering::SeqCst)
    }

    /// Await the pending refresh, starting one with `start` if none is pending
    ///
    /// `start` is only invoked when the slot is empty, under the slot lock,
    /// so two callers can never both become the refresher.
    pub async fn run<F, Fut>(&self, start: F) -> RefreshOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RefreshOutcome> + Send + 'static,
    {
        let pending = {
            let mut slot = self.slot.lock();
            match slot.as_ref() {
                Some(pending) => {
                    debug!("Refresh already in flight, waiting on it");
                    pending.clone()
                }
                None => {
                    let refresh = start();
                    let slot_handle = Arc::clone(&self.slot);
                    let pending = async move {
                        let outcome = refresh.await;
                        slot_handle.lock().take();
                        outcome
                    }
                    .boxed()
                    .shared();

                    *slot = Some(pending.clone());
                    self.started.fetch_add(1, Ordering::SeqCst);
                    pending
                }
            }
        };

        pending.await
    }
}
