//! Floor-plan editing engine for the venue manager.
//!
//! This crate owns the editing lifecycle of a venue layout: translating raw
//! pointer and keyboard events into scene mutations, keeping the camera that
//! maps device pixels onto the 800×600 logical view box, hit-testing placed
//! elements, and painting the active floor plan. The host layer wires DOM
//! events to the engine and forwards the resulting [`engine::Action`]s
//! (saves in particular) to the backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Scene collection, floor plans and placed elements |
//! | [`camera`] | Pan/zoom camera and device ↔ logical conversions |
//! | [`boundary`] | Venue boundary outlines and clipping geometry |
//! | [`input`] | Input event types and the manipulation state machine |
//! | [`hit`] | Hit-testing against placed elements and the resize handle |
//! | [`panel`] | Property panel projection and edits for the selected element |
//! | [`render`] | Display list construction and canvas painting |
//! | [`save`] | Save indicator state (saving / saved / failed) |
//! | [`consts`] | Shared numeric constants (minimum sizes, view box, zoom limits) |

pub mod boundary;
pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod panel;
pub mod render;
pub mod save;
