#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::{ElementId, Scene, SceneElement};

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    /// The bottom-right resize affordance of the selected element.
    ResizeHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Logical position of an element's resize handle (its bottom-right corner).
#[must_use]
pub fn resize_handle_position(el: &SceneElement) -> Point {
    Point::new(el.x + el.width, el.y + el.height)
}

/// Test which element (if any) is under `world_pt`.
///
/// The selected element's resize handle wins over everything, since it sits on
/// the element's corner and may overlap neighbours. Bodies are then checked
/// top-most first.
#[must_use]
pub fn hit_test(world_pt: Point, scene: &Scene, camera: &Camera, selected_id: Option<ElementId>) -> Option<Hit> {
    if !world_pt.is_finite() {
        return None;
    }

    if let Some(selected) = selected_id.and_then(|id| scene.element(&id)) {
        let slop = camera.screen_dist_to_world(HANDLE_RADIUS_PX);
        let handle = resize_handle_position(selected);
        let dx = world_pt.x - handle.x;
        let dy = world_pt.y - handle.y;
        if dx * dx + dy * dy <= slop * slop {
            return Some(Hit { element_id: selected.id, part: HitPart::ResizeHandle });
        }
    }

    scene
        .elements
        .iter()
        .rev()
        .find(|el| el.rect().contains(world_pt))
        .map(|el| Hit { element_id: el.id, part: HitPart::Body })
}
