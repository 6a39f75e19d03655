//! Input model: modifier keys, mouse buttons, and the manipulation state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up. It
//! is a sum type so that "dragging and resizing at once" cannot be expressed.
//! Each active variant carries only the context needed to turn a pointer
//! position into an absolute element update, which makes every pointer-move
//! idempotent: replaying the same position yields the same update.
//!
//! Selection lives beside the gesture in `UiState` and survives pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{ElementId, PartialElement, SceneElement, clamp_dimension};

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Width and height in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Persistent UI state visible to the renderer and the property panel.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the selected element in the active scene, if any.
    pub selected_id: Option<ElementId>,
}

/// The manipulation state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// An element follows the pointer.
    Dragging {
        /// Element being moved.
        id: ElementId,
        /// Pointer position minus element position at grab time.
        grab_offset: Point,
    },
    /// An element's bottom-right corner follows the pointer.
    Resizing {
        /// Element being resized.
        id: ElementId,
        /// Element size when the handle was grabbed.
        anchor_size: Size,
        /// Logical pointer position when the handle was grabbed.
        anchor_pointer: Point,
    },
}

/// Element update produced by a pointer move during a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Manipulation {
    Move { id: ElementId, x: f64, y: f64 },
    Resize { id: ElementId, width: f64, height: f64 },
}

impl Manipulation {
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Move { id, .. } | Self::Resize { id, .. } => *id,
        }
    }

    /// The sparse update to apply to the element.
    #[must_use]
    pub fn to_partial(&self) -> PartialElement {
        match *self {
            Self::Move { x, y, .. } => PartialElement::position(x, y),
            Self::Resize { width, height, .. } => PartialElement::size(width, height),
        }
    }
}

impl InputState {
    /// Pointer-down on an element body.
    #[must_use]
    pub fn begin_drag(element: &SceneElement, pointer: Point) -> Self {
        Self::Dragging { id: element.id, grab_offset: pointer - Point::new(element.x, element.y) }
    }

    /// Pointer-down on the resize handle of an element.
    #[must_use]
    pub fn begin_resize(element: &SceneElement, pointer: Point) -> Self {
        Self::Resizing {
            id: element.id,
            anchor_size: Size { width: element.width, height: element.height },
            anchor_pointer: pointer,
        }
    }

    /// Update emitted for a pointer move to logical `pointer`, if a gesture is active.
    ///
    /// Non-finite pointer positions emit nothing.
    #[must_use]
    pub fn pointer_move(&self, pointer: Point) -> Option<Manipulation> {
        if !pointer.is_finite() {
            return None;
        }
        match self {
            Self::Idle => None,
            Self::Dragging { id, grab_offset } => {
                let pos = pointer - *grab_offset;
                Some(Manipulation::Move { id: *id, x: pos.x, y: pos.y })
            }
            Self::Resizing { id, anchor_size, anchor_pointer } => {
                let delta = pointer - *anchor_pointer;
                Some(Manipulation::Resize {
                    id: *id,
                    width: clamp_dimension(anchor_size.width + delta.x),
                    height: clamp_dimension(anchor_size.height + delta.y),
                })
            }
        }
    }

    /// End any gesture. Returns the element that was being manipulated.
    pub fn release(&mut self) -> Option<ElementId> {
        let id = self.active_id();
        *self = Self::Idle;
        id
    }

    /// Element under manipulation, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
