//! Save indicator: the pending / confirmed / failed badge on the save button.
//!
//! Saving itself happens outside the engine. The host asks for a snapshot,
//! hands it to the persistence gateway, and reports the outcome back here.
//! Time is passed in as milliseconds so the same code runs under a browser
//! clock and in tests.

#[cfg(test)]
#[path = "save_test.rs"]
mod save_test;

use crate::consts::SAVE_SUCCESS_CLEAR_MS;

/// Visible state of the last save attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing to report.
    #[default]
    Idle,
    /// A save is in flight.
    Saving,
    /// The last save succeeded at `at_ms`; clears itself after a short interval.
    Saved { at_ms: u64 },
    /// The last save failed. Stays until the next attempt or an explicit dismiss.
    Failed { message: String },
}

/// Tracks [`SaveStatus`] transitions.
#[derive(Debug, Clone, Default)]
pub struct SaveIndicator {
    status: SaveStatus,
}

impl SaveIndicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.status == SaveStatus::Saving
    }

    /// Enter `Saving`. Refused (returns `false`) while a save is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_saving() {
            return false;
        }
        self.status = SaveStatus::Saving;
        true
    }

    /// Record a successful save. Ignored unless a save is in flight.
    pub fn succeed(&mut self, now_ms: u64) -> bool {
        if !self.is_saving() {
            return false;
        }
        self.status = SaveStatus::Saved { at_ms: now_ms };
        true
    }

    /// Record a failed save. Ignored unless a save is in flight.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_saving() {
            return false;
        }
        self.status = SaveStatus::Failed { message: message.into() };
        true
    }

    /// Clear a failure notice.
    pub fn dismiss(&mut self) -> bool {
        if matches!(self.status, SaveStatus::Failed { .. }) {
            self.status = SaveStatus::Idle;
            return true;
        }
        false
    }

    /// Advance the clock. Returns `true` when the visible state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let SaveStatus::Saved { at_ms } = self.status {
            if now_ms.saturating_sub(at_ms) >= SAVE_SUCCESS_CLEAR_MS {
                self.status = SaveStatus::Idle;
                return true;
            }
        }
        false
    }

    /// Text for the save button.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.status {
            SaveStatus::Idle => "Save Layout",
            SaveStatus::Saving => "Saving...",
            SaveStatus::Saved { .. } => "Saved!",
            SaveStatus::Failed { .. } => "Save failed",
        }
    }
}
