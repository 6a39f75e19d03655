#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn sample_has_two_plans_with_expo_active() {
    let store = sample_store().unwrap();
    let names: Vec<_> = store.scenes().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Ground Floor Expo", "Workshop Room B"]);
    assert_eq!(store.active_scene().name, "Ground Floor Expo");
}

#[test]
fn expo_layout_matches_seed() {
    let store = sample_store().unwrap();
    let expo = &store.scenes()[0];
    assert_eq!(expo.shape, BoundaryShape::Rectangle);
    let labels: Vec<_> = expo.elements.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Main Stage", "Exhibitor A", "Exhibitor B", "Pillar"]);
    let stage = &expo.elements[0];
    assert_eq!(stage.kind, ElementKind::Stage);
    assert_eq!((stage.x, stage.y, stage.width, stage.height), (200.0, 50.0, 400.0, 100.0));
    assert_eq!(expo.elements[1].status, ElementStatus::Reserved);
}

#[test]
fn workshop_is_square_with_info_desk() {
    let store = sample_store().unwrap();
    let workshop = &store.scenes()[1];
    assert_eq!(workshop.shape, BoundaryShape::Square);
    assert_eq!(workshop.elements.len(), 1);
    assert_eq!(workshop.elements[0].kind, ElementKind::Amenity);
    assert_eq!(workshop.elements[0].label, "Info Desk");
}

#[test]
fn sample_fits_inside_boundaries() {
    let store = sample_store().unwrap();
    for scene in store.scenes() {
        assert!(scene.out_of_bounds().is_empty(), "{}", scene.name);
    }
}
