#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};

/// A point in either device (screen) or logical (scene) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Mapping between device pixels and scene logical coordinates.
///
/// The renderer supplies whatever forward transform it draws with; the
/// interaction layer only ever goes through this trait, so the two stay exact
/// inverses of each other.
pub trait ViewTransform {
    /// Device pixels → logical units.
    fn to_logical(&self, device: Point) -> Point;

    /// Logical units → device pixels.
    fn to_device(&self, logical: Point) -> Point;
}

/// Convert a device point with any [`ViewTransform`].
#[must_use]
pub fn to_logical<T: ViewTransform + ?Sized>(device: Point, transform: &T) -> Point {
    transform.to_logical(device)
}

/// Convert a logical point with any [`ViewTransform`].
#[must_use]
pub fn to_device<T: ViewTransform + ?Sized>(logical: Point, transform: &T) -> Point {
    transform.to_device(logical)
}

/// Camera state for pan/zoom over the floor plan.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = one logical unit per pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Camera that shows the whole 800×600 view box centred in a viewport,
    /// scaled uniformly so it fits (SVG `xMidYMid meet`).
    ///
    /// Degenerate viewports (zero, negative or non-finite) yield the identity camera.
    #[must_use]
    pub fn fit_view_box(viewport_w: f64, viewport_h: f64) -> Self {
        if !(viewport_w.is_finite() && viewport_h.is_finite()) || viewport_w <= 0.0 || viewport_h <= 0.0 {
            return Self::default();
        }
        let zoom = (viewport_w / VIEW_BOX_WIDTH).min(viewport_h / VIEW_BOX_HEIGHT);
        Self {
            pan_x: (viewport_w - VIEW_BOX_WIDTH * zoom) * 0.5,
            pan_y: (viewport_h - VIEW_BOX_HEIGHT * zoom) * 0.5,
            zoom,
        }
    }

    /// Convert a screen-space point (CSS pixels) to logical coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a logical point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to a logical distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.pan_x += dx;
            self.pan_y += dy;
        }
    }

    /// Multiply zoom by `factor`, keeping the logical point under `screen` fixed.
    ///
    /// The resulting zoom is clamped to [`MIN_ZOOM`, `MAX_ZOOM`]; a non-finite or
    /// non-positive factor leaves the camera unchanged.
    pub fn zoom_at(&mut self, screen: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 || !screen.is_finite() {
            return;
        }
        let anchor = self.screen_to_world(screen);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan_x = screen.x - anchor.x * self.zoom;
        self.pan_y = screen.y - anchor.y * self.zoom;
    }
}

impl ViewTransform for Camera {
    fn to_logical(&self, device: Point) -> Point {
        self.screen_to_world(device)
    }

    fn to_device(&self, logical: Point) -> Point {
        self.world_to_screen(logical)
    }
}
