//! In-process gateway: keeps every saved snapshot in memory.
//!
//! Used by the CLI for dry runs and by tests that need to observe what
//! would have been sent, or to simulate a backend outage.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;
use venue_canvas::doc::SceneStore;

use crate::error::GatewayError;
use crate::{PersistenceGateway, SaveReceipt};

#[derive(Debug, Default)]
pub struct InMemoryGateway {
    saved: Mutex<Vec<SceneStore>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose every save fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        let gw = Self::default();
        gw.set_failure(Some(message.into()));
        gw
    }

    /// Make subsequent saves fail (`Some`) or succeed (`None`).
    pub fn set_failure(&self, message: Option<String>) {
        *lock(&self.failure) = message;
    }

    /// Every snapshot accepted so far, oldest first.
    #[must_use]
    pub fn saved(&self) -> Vec<SceneStore> {
        lock(&self.saved).clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<SceneStore> {
        lock(&self.saved).last().cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait::async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn save(&self, store: &SceneStore) -> Result<SaveReceipt, GatewayError> {
        if let Some(message) = lock(&self.failure).clone() {
            return Err(GatewayError::Unavailable(message));
        }
        let bytes = serde_json::to_vec(store).map_err(|e| GatewayError::Encode(e.to_string()))?.len();
        let mut saved = lock(&self.saved);
        saved.push(store.clone());
        debug!(count = saved.len(), bytes, "snapshot stored in memory");
        Ok(SaveReceipt { status: 200, bytes })
    }
}
