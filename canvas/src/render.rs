//! Rendering: turns a floor plan into a display list and paints it.
//!
//! Rendering is split in two. [`scene_view`] is pure: it decides what each
//! element looks like (corner radius, stroke colour, fill, label placement,
//! boundary placement) and where the resize affordance sits. [`draw`] is the
//! only place that touches [`web_sys::CanvasRenderingContext2d`]; it replays a
//! [`SceneView`] onto the canvas and never mutates application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::boundary::{Outline, Placement, Rect};
use crate::camera::{Camera, Point};
use crate::consts::{HANDLE_DRAW_RADIUS, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};
use crate::doc::{ElementId, ElementKind, ElementStatus, Scene, SceneElement};
use crate::hit::resize_handle_position;

// ── Palette ─────────────────────────────────────────────────────

pub const COLOR_AVAILABLE: &str = "#10b981";
pub const COLOR_RESERVED: &str = "#f59e0b";
pub const COLOR_OCCUPIED: &str = "#64748b";
/// Obstacle outline and label.
pub const COLOR_MUTED: &str = "#94a3b8";
pub const COLOR_ACCENT: &str = "#6366f1";

const COLOR_SURFACE: &str = "#ffffff";
const COLOR_TEXT: &str = "#1e293b";
const COLOR_BORDER: &str = "#e2e8f0";
const COLOR_BORDER_STRONG: &str = "#475569";
const COLOR_HATCH: &str = "rgba(100, 116, 139, 0.3)";

/// Grid cell size in logical units.
const GRID_STEP: f64 = 40.0;
/// Spacing between obstacle hatch lines in logical units.
const HATCH_STEP: f64 = 10.0;
/// Length of the corner tick drawn inside the resize handle.
const HANDLE_TICK: f64 = 10.0;
const EMPTY_HINT: &str = "FLOOR PLAN EMPTY";
const EMPTY_HINT_FONT_SIZE: f64 = 14.0;

/// How an element body is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Plain background.
    Surface,
    /// Highlighted because the element is selected.
    Accent,
    /// Diagonal hatch marking a blocked area.
    Hatch,
}

/// Everything the painter needs to draw one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
    pub id: ElementId,
    pub kind: ElementKind,
    pub rect: Rect,
    /// Already limited to half the shorter side.
    pub corner_radius: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub fill: Fill,
    pub label: String,
    pub label_color: &'static str,
    pub font_size: f64,
    /// Centre-anchored baseline position of the label.
    pub label_pos: Point,
    pub selected: bool,
    /// Relation to the scene boundary; anything but `Inside` is clipped.
    pub placement: Placement,
}

/// Display list for one floor plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    /// Boundary outline. Also the clip region for elements.
    pub outline: Outline,
    /// Elements in draw order (bottom first).
    pub elements: Vec<ElementView>,
    /// Centre of the resize handle of the selected element.
    pub resize_handle: Option<Point>,
    /// Show the "empty" hint when the scene has no elements.
    pub empty_hint: bool,
}

/// Build the display list for `scene` with `selected` highlighted.
#[must_use]
pub fn scene_view(scene: &Scene, selected: Option<ElementId>) -> SceneView {
    let outline = scene.shape.outline();
    let elements = scene
        .elements
        .iter()
        .map(|el| element_view(el, &outline, selected == Some(el.id)))
        .collect();
    let resize_handle = selected.and_then(|id| scene.element(&id)).map(resize_handle_position);

    SceneView { outline, elements, resize_handle, empty_hint: scene.is_empty() }
}

fn element_view(el: &SceneElement, outline: &Outline, selected: bool) -> ElementView {
    let rect = el.rect();
    let obstacle = el.kind == ElementKind::Obstacle;

    let stroke = if selected { COLOR_ACCENT } else { element_stroke(el) };
    let fill = if obstacle {
        Fill::Hatch
    } else if selected {
        Fill::Accent
    } else {
        Fill::Surface
    };
    let label_color = if selected {
        COLOR_SURFACE
    } else if obstacle {
        COLOR_MUTED
    } else {
        COLOR_TEXT
    };
    let label_offset = if el.kind == ElementKind::Seat { 0.0 } else { 5.0 };
    let center = rect.center();

    ElementView {
        id: el.id,
        kind: el.kind,
        rect,
        corner_radius: corner_radius(el.kind).min(el.width * 0.5).min(el.height * 0.5),
        stroke,
        stroke_width: if selected { 4.0 } else { 2.0 },
        fill,
        label: el.label.clone(),
        label_color,
        font_size: el.width.min(el.height) / 5.0,
        label_pos: Point::new(center.x, center.y + label_offset),
        selected,
        placement: outline.placement(rect),
    }
}

/// Nominal corner radius per kind, before limiting to the element size.
#[must_use]
pub fn corner_radius(kind: ElementKind) -> f64 {
    match kind {
        ElementKind::Obstacle => 4.0,
        ElementKind::Booth => 12.0,
        ElementKind::Stage => 6.0,
        ElementKind::Seat | ElementKind::Entrance | ElementKind::Amenity => 40.0,
    }
}

/// Outline colour of an unselected element.
#[must_use]
pub fn element_stroke(el: &SceneElement) -> &'static str {
    if el.kind == ElementKind::Obstacle {
        return COLOR_MUTED;
    }
    status_color(el.status)
}

#[must_use]
pub fn status_color(status: ElementStatus) -> &'static str {
    match status {
        ElementStatus::Available => COLOR_AVAILABLE,
        ElementStatus::Reserved => COLOR_RESERVED,
        ElementStatus::Occupied => COLOR_OCCUPIED,
    }
}

// =============================================================
// Painter
// =============================================================

/// Paint `view` through `camera`.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    view: &SceneView,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and set up transforms.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: everything inside the boundary, clipped to it.
    ctx.save();
    outline_path(ctx, &view.outline)?;
    ctx.clip();

    draw_boundary(ctx, &view.outline)?;
    if view.empty_hint {
        draw_empty_hint(ctx)?;
    }
    for el in &view.elements {
        draw_element(ctx, el)?;
    }
    if let Some(handle) = view.resize_handle {
        draw_resize_handle(ctx, handle)?;
    }
    ctx.restore();

    // Layer 3: the view box frame, so out-of-bounds space stays legible.
    draw_view_box_frame(ctx)
}

fn outline_path(ctx: &CanvasRenderingContext2d, outline: &Outline) -> Result<(), JsValue> {
    ctx.begin_path();
    match *outline {
        Outline::Rect(r) => ctx.rect(r.x, r.y, r.width, r.height),
        Outline::Circle { center, radius } => ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?,
    }
    Ok(())
}

fn draw_boundary(ctx: &CanvasRenderingContext2d, outline: &Outline) -> Result<(), JsValue> {
    let bounds = outline.bounds();

    ctx.set_stroke_style_str(COLOR_BORDER);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let mut x = bounds.x;
    while x <= bounds.right() {
        ctx.move_to(x, bounds.y);
        ctx.line_to(x, bounds.bottom());
        x += GRID_STEP;
    }
    let mut y = bounds.y;
    while y <= bounds.bottom() {
        ctx.move_to(bounds.x, y);
        ctx.line_to(bounds.right(), y);
        y += GRID_STEP;
    }
    ctx.stroke();

    outline_path(ctx, outline)?;
    ctx.set_stroke_style_str(COLOR_BORDER_STRONG);
    ctx.set_line_width(2.0);
    ctx.stroke();
    Ok(())
}

fn draw_empty_hint(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_global_alpha(0.2);
    ctx.set_fill_style_str(COLOR_OCCUPIED);
    ctx.set_text_align("center");
    ctx.set_font(&format!("800 {EMPTY_HINT_FONT_SIZE}px sans-serif"));
    ctx.fill_text(EMPTY_HINT, VIEW_BOX_WIDTH * 0.5, VIEW_BOX_HEIGHT * 0.5)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Elements
// =============================================================

fn draw_element(ctx: &CanvasRenderingContext2d, el: &ElementView) -> Result<(), JsValue> {
    ctx.save();

    rounded_rect_path(ctx, el.rect, el.corner_radius)?;
    match el.fill {
        Fill::Surface => {
            ctx.set_fill_style_str(COLOR_SURFACE);
            ctx.fill();
        }
        Fill::Accent => {
            ctx.set_fill_style_str(COLOR_ACCENT);
            ctx.fill();
        }
        Fill::Hatch => draw_hatch(ctx, el)?,
    }

    ctx.set_stroke_style_str(el.stroke);
    ctx.set_line_width(el.stroke_width);
    ctx.stroke();

    if !el.label.is_empty() {
        ctx.set_fill_style_str(el.label_color);
        ctx.set_text_align("center");
        ctx.set_font(&format!("800 {}px sans-serif", el.font_size));
        ctx.fill_text(&el.label.to_uppercase(), el.label_pos.x, el.label_pos.y)?;
    }

    ctx.restore();
    Ok(())
}

/// Diagonal lines clipped to the element's rounded outline.
///
/// Leaves the rounded path as the current path so the caller can stroke it.
fn draw_hatch(ctx: &CanvasRenderingContext2d, el: &ElementView) -> Result<(), JsValue> {
    let r = el.rect;
    ctx.save();
    ctx.clip();
    ctx.set_stroke_style_str(COLOR_HATCH);
    ctx.set_line_width(4.0);
    ctx.begin_path();
    let mut offset = -r.height;
    while offset <= r.width {
        ctx.move_to(r.x + offset, r.bottom());
        ctx.line_to(r.x + offset + r.height, r.y);
        offset += HATCH_STEP;
    }
    ctx.stroke();
    ctx.restore();
    rounded_rect_path(ctx, r, el.corner_radius)
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, r: Rect, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.move_to(r.x + radius, r.y);
    ctx.arc_to(r.right(), r.y, r.right(), r.bottom(), radius)?;
    ctx.arc_to(r.right(), r.bottom(), r.x, r.bottom(), radius)?;
    ctx.arc_to(r.x, r.bottom(), r.x, r.y, radius)?;
    ctx.arc_to(r.x, r.y, r.right(), r.y, radius)?;
    ctx.close_path();
    Ok(())
}

// =============================================================
// Selection UI
// =============================================================

fn draw_resize_handle(ctx: &CanvasRenderingContext2d, center: Point) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, HANDLE_DRAW_RADIUS, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(COLOR_ACCENT);
    ctx.fill();
    ctx.set_stroke_style_str(COLOR_SURFACE);
    ctx.set_line_width(2.0);
    ctx.stroke();

    ctx.begin_path();
    ctx.move_to(center.x - HANDLE_TICK, center.y);
    ctx.line_to(center.x, center.y);
    ctx.line_to(center.x, center.y - HANDLE_TICK);
    ctx.set_line_width(1.5);
    ctx.set_line_cap("round");
    ctx.stroke();
    Ok(())
}

fn draw_view_box_frame(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let dash = js_sys::Array::of2(&JsValue::from_f64(10.0), &JsValue::from_f64(5.0));
    ctx.save();
    ctx.set_global_alpha(0.1);
    ctx.set_line_dash(&dash)?;
    ctx.set_stroke_style_str(COLOR_BORDER_STRONG);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(0.0, 0.0, VIEW_BOX_WIDTH, VIEW_BOX_HEIGHT);
    ctx.restore();
    Ok(())
}
