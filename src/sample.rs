//! The two floor plans a fresh venue starts with.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use venue_canvas::boundary::BoundaryShape;
use venue_canvas::doc::{DocError, ElementKind, ElementStatus, Scene, SceneElement, SceneStore};

/// "Ground Floor Expo" (active) and "Workshop Room B".
///
/// # Errors
///
/// Never in practice; ids are freshly generated.
pub fn sample_store() -> Result<SceneStore, DocError> {
    let mut expo = Scene::new("Ground Floor Expo", BoundaryShape::Rectangle);
    expo.elements = vec![
        placed(ElementKind::Stage, (200.0, 50.0, 400.0, 100.0), "Main Stage", ElementStatus::Occupied),
        placed(ElementKind::Booth, (50.0, 200.0, 100.0, 100.0), "Exhibitor A", ElementStatus::Reserved),
        placed(ElementKind::Booth, (650.0, 200.0, 100.0, 100.0), "Exhibitor B", ElementStatus::Available),
        placed(ElementKind::Obstacle, (375.0, 300.0, 50.0, 50.0), "Pillar", ElementStatus::Occupied),
    ];

    let mut workshop = Scene::new("Workshop Room B", BoundaryShape::Square);
    workshop.elements =
        vec![placed(ElementKind::Amenity, (375.0, 300.0, 50.0, 50.0), "Info Desk", ElementStatus::Occupied)];

    let active = expo.id;
    SceneStore::from_snapshot(vec![expo, workshop], Some(active))
}

fn placed(kind: ElementKind, (x, y, width, height): (f64, f64, f64, f64), label: &str, status: ElementStatus) -> SceneElement {
    SceneElement { x, y, width, height, label: label.to_string(), status, ..SceneElement::new(kind) }
}
