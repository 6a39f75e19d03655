#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::boundary::BoundaryShape;

fn element(kind: ElementKind, x: f64, y: f64, w: f64, h: f64) -> SceneElement {
    SceneElement {
        id: Uuid::new_v4(),
        kind,
        x,
        y,
        width: w,
        height: h,
        label: "Exhibitor A".into(),
        status: ElementStatus::Available,
        assigned_to: None,
    }
}

fn scene_with(shape: BoundaryShape, elements: Vec<SceneElement>) -> Scene {
    let mut scene = Scene::new("Ground Floor Expo", shape);
    scene.elements = elements;
    scene
}

// =============================================================
// Scene-level view
// =============================================================

#[test]
fn empty_scene_shows_hint_and_no_handle() {
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, Vec::new()), None);
    assert!(view.empty_hint);
    assert!(view.elements.is_empty());
    assert!(view.resize_handle.is_none());
}

#[test]
fn outline_follows_boundary_shape() {
    for shape in [BoundaryShape::Rectangle, BoundaryShape::Square, BoundaryShape::Circle] {
        let view = scene_view(&scene_with(shape, Vec::new()), None);
        assert_eq!(view.outline, shape.outline());
    }
}

#[test]
fn elements_keep_insertion_order() {
    let a = element(ElementKind::Booth, 0.0, 0.0, 80.0, 80.0);
    let b = element(ElementKind::Seat, 10.0, 10.0, 60.0, 60.0);
    let ids = [a.id, b.id];
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![a, b]), None);
    assert!(!view.empty_hint);
    let order: Vec<_> = view.elements.iter().map(|e| e.id).collect();
    assert_eq!(order, ids);
}

#[test]
fn resize_handle_at_bottom_right_of_selected() {
    let el = element(ElementKind::Booth, 350.0, 250.0, 80.0, 80.0);
    let id = el.id;
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![el]), Some(id));
    assert_eq!(view.resize_handle, Some(Point::new(430.0, 330.0)));
    assert!(view.elements[0].selected);
}

#[test]
fn stale_selection_has_no_handle() {
    let el = element(ElementKind::Booth, 350.0, 250.0, 80.0, 80.0);
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![el]), Some(Uuid::new_v4()));
    assert!(view.resize_handle.is_none());
    assert!(!view.elements[0].selected);
}

// =============================================================
// Element styling
// =============================================================

#[test]
fn corner_radius_by_kind() {
    assert_eq!(corner_radius(ElementKind::Obstacle), 4.0);
    assert_eq!(corner_radius(ElementKind::Booth), 12.0);
    assert_eq!(corner_radius(ElementKind::Stage), 6.0);
    assert_eq!(corner_radius(ElementKind::Seat), 40.0);
    assert_eq!(corner_radius(ElementKind::Entrance), 40.0);
    assert_eq!(corner_radius(ElementKind::Amenity), 40.0);
}

#[test]
fn corner_radius_limited_to_half_short_side() {
    let seat = element(ElementKind::Seat, 0.0, 0.0, 60.0, 30.0);
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![seat]), None);
    assert_eq!(view.elements[0].corner_radius, 15.0);

    let stage = element(ElementKind::Stage, 0.0, 0.0, 400.0, 100.0);
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![stage]), None);
    assert_eq!(view.elements[0].corner_radius, 6.0);
}

#[test]
fn stroke_follows_status() {
    let cases = [
        (ElementStatus::Available, COLOR_AVAILABLE),
        (ElementStatus::Reserved, COLOR_RESERVED),
        (ElementStatus::Occupied, COLOR_OCCUPIED),
    ];
    for (status, color) in cases {
        let mut el = element(ElementKind::Booth, 0.0, 0.0, 80.0, 80.0);
        el.status = status;
        assert_eq!(element_stroke(&el), color);
        assert_eq!(status_color(status), color);
    }
}

#[test]
fn obstacle_is_muted_and_hatched_regardless_of_status() {
    let mut el = element(ElementKind::Obstacle, 375.0, 300.0, 50.0, 50.0);
    el.status = ElementStatus::Available;
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![el]), None);
    let ev = &view.elements[0];
    assert_eq!(ev.stroke, COLOR_MUTED);
    assert_eq!(ev.fill, Fill::Hatch);
    assert_eq!(ev.label_color, COLOR_MUTED);
}

#[test]
fn selected_element_uses_accent() {
    let el = element(ElementKind::Booth, 0.0, 0.0, 80.0, 80.0);
    let id = el.id;
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![el]), Some(id));
    let ev = &view.elements[0];
    assert_eq!(ev.stroke, COLOR_ACCENT);
    assert_eq!(ev.fill, Fill::Accent);
    assert_eq!(ev.stroke_width, 4.0);
}

#[test]
fn selected_obstacle_keeps_hatch() {
    let el = element(ElementKind::Obstacle, 0.0, 0.0, 40.0, 40.0);
    let id = el.id;
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![el]), Some(id));
    assert_eq!(view.elements[0].fill, Fill::Hatch);
    assert_eq!(view.elements[0].stroke, COLOR_ACCENT);
}

#[test]
fn unselected_stroke_width_is_two() {
    let el = element(ElementKind::Seat, 0.0, 0.0, 60.0, 60.0);
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![el]), None);
    assert_eq!(view.elements[0].stroke_width, 2.0);
    assert_eq!(view.elements[0].fill, Fill::Surface);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn label_font_scales_with_short_side() {
    let el = element(ElementKind::Stage, 200.0, 50.0, 400.0, 100.0);
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![el]), None);
    assert_eq!(view.elements[0].font_size, 20.0);
    assert_eq!(view.elements[0].label, "Exhibitor A");
}

#[test]
fn label_offset_except_for_seats() {
    let booth = element(ElementKind::Booth, 0.0, 0.0, 80.0, 80.0);
    let seat = element(ElementKind::Seat, 100.0, 0.0, 60.0, 60.0);
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![booth, seat]), None);
    assert_eq!(view.elements[0].label_pos, Point::new(40.0, 45.0));
    assert_eq!(view.elements[1].label_pos, Point::new(130.0, 30.0));
}

// =============================================================
// Boundary placement
// =============================================================

#[test]
fn placement_reported_per_element() {
    let inside = element(ElementKind::Booth, 350.0, 250.0, 80.0, 80.0);
    let partial = element(ElementKind::Booth, 780.0, 10.0, 40.0, 40.0);
    let outside = element(ElementKind::Booth, 900.0, 0.0, 20.0, 20.0);
    let view = scene_view(&scene_with(BoundaryShape::Rectangle, vec![inside, partial, outside]), None);
    let placements: Vec<_> = view.elements.iter().map(|e| e.placement).collect();
    assert_eq!(placements, [Placement::Inside, Placement::Partial, Placement::Outside]);
}

#[test]
fn square_boundary_excludes_left_margin() {
    let el = element(ElementKind::Seat, 10.0, 10.0, 40.0, 40.0);
    let view = scene_view(&scene_with(BoundaryShape::Square, vec![el]), None);
    assert_eq!(view.elements[0].placement, Placement::Outside);
}
