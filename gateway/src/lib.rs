//! Persistence gateway for venue layouts.
//!
//! DESIGN
//! ======
//! The editor core never performs I/O. When the user asks to save, the core
//! hands out a snapshot of the scene collection
//! (`Action::SaveRequested`); something has to carry that snapshot to the
//! backend and report the outcome back so the save indicator can move on.
//! That something is a [`PersistenceGateway`]. [`run_save`] drives one full
//! cycle against any gateway.
//!
//! Two gateways ship here: [`HttpGateway`] (`PUT` of the JSON snapshot to the
//! venue API) and [`InMemoryGateway`] (records snapshots, can be told to fail).
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`GatewayError`]. A failed save never touches the
//! in-memory model; the editor keeps every edit and shows the failure.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod save;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpGateway;
pub use memory::InMemoryGateway;
pub use save::{run_save, system_clock_ms};

use venue_canvas::doc::SceneStore;

/// What the backend acknowledged for a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReceipt {
    /// HTTP status (or its equivalent) returned by the backend.
    pub status: u16,
    /// Size of the encoded payload.
    pub bytes: usize,
}

/// Stores a scene collection somewhere durable.
#[async_trait::async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Persist the full scene collection.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the snapshot could not be encoded or the
    /// backend did not accept it.
    async fn save(&self, store: &SceneStore) -> Result<SaveReceipt, GatewayError>;
}
