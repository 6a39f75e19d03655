//! One save cycle: snapshot from the editor, gateway call, outcome back.

#[cfg(test)]
#[path = "save_test.rs"]
mod save_test;

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;
use venue_canvas::engine::{Action, EngineCore};

use crate::error::GatewayError;
use crate::{PersistenceGateway, SaveReceipt};

/// Save the editor's scene collection through `gateway`.
///
/// The editor's save indicator moves to "saving" before the call and to
/// "saved" or "failed" after it, stamped with `clock()`. Edits made while the
/// call is outstanding are not part of this save.
///
/// # Errors
///
/// Returns [`GatewayError::SaveInFlight`] if the editor is already saving, or
/// whatever the gateway reported.
pub async fn run_save<G, C>(gateway: &G, core: &mut EngineCore, clock: C) -> Result<SaveReceipt, GatewayError>
where
    G: PersistenceGateway + ?Sized,
    C: Fn() -> u64,
{
    let Action::SaveRequested(snapshot) = core.request_save() else {
        return Err(GatewayError::SaveInFlight);
    };
    info!(scenes = snapshot.len(), active_scene = %snapshot.active_id(), "saving layout");

    let result = gateway.save(&snapshot).await;
    let outcome = match &result {
        Ok(_) => Ok(()),
        Err(err) => Err(err.to_string()),
    };
    core.finish_save(outcome, clock());
    result
}

/// Milliseconds since the Unix epoch, for stamping save outcomes.
#[must_use]
pub fn system_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
