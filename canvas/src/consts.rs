//! Shared numeric constants for the canvas crate.

// ── Scene geometry ──────────────────────────────────────────────

/// Width of the logical view box every floor plan is drawn into.
pub const VIEW_BOX_WIDTH: f64 = 800.0;

/// Height of the logical view box every floor plan is drawn into.
pub const VIEW_BOX_HEIGHT: f64 = 600.0;

/// Smallest width or height an element may have, in logical units.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Where newly added elements are placed, regardless of pan/zoom.
pub const DEFAULT_ELEMENT_X: f64 = 350.0;
pub const DEFAULT_ELEMENT_Y: f64 = 250.0;

/// Name given to the scene a fresh engine starts with.
pub const DEFAULT_SCENE_NAME: &str = "Main Hall";

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for the resize handle.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Drawn radius of the resize handle, in logical units.
pub const HANDLE_DRAW_RADIUS: f64 = 6.0;

// ── Camera ──────────────────────────────────────────────────────

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

/// Zoom multiplier applied per 100 px of wheel delta.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

// ── Save indicator ──────────────────────────────────────────────

/// How long the "saved" confirmation stays visible, in milliseconds.
pub const SAVE_SUCCESS_CLEAR_MS: u64 = 3_000;
