//! Venue boundary outlines and the clipping geometry derived from them.
//!
//! Every floor plan is laid out in the same 800×600 logical view box. The
//! boundary shape picks which region of that box is the venue: the full
//! rectangle, a centred square, or the inscribed circle. The renderer uses the
//! outline as both the floor fill and the clip mask; the model itself never
//! confines elements to it, so [`Outline::placement`] exists to report
//! elements that spill over the edge.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};

/// Geometric outline of a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryShape {
    /// The full view box.
    #[default]
    Rectangle,
    /// A square as tall as the view box, centred horizontally.
    Square,
    /// The circle inscribed in the view box height, centred.
    Circle,
}

impl BoundaryShape {
    /// Outline of this shape in logical coordinates.
    #[must_use]
    pub fn outline(self) -> Outline {
        match self {
            Self::Rectangle => Outline::Rect(Rect::new(0.0, 0.0, VIEW_BOX_WIDTH, VIEW_BOX_HEIGHT)),
            Self::Square => Outline::Rect(Rect::new(
                (VIEW_BOX_WIDTH - VIEW_BOX_HEIGHT) * 0.5,
                0.0,
                VIEW_BOX_HEIGHT,
                VIEW_BOX_HEIGHT,
            )),
            Self::Circle => Outline::Circle {
                center: Point::new(VIEW_BOX_WIDTH * 0.5, VIEW_BOX_HEIGHT * 0.5),
                radius: VIEW_BOX_HEIGHT * 0.5,
            },
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }
}

/// Axis-aligned rectangle in logical units; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Corners in clockwise order starting at the top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Point inside the rectangle nearest to `pt`.
    #[must_use]
    pub fn clamp_point(&self, pt: Point) -> Point {
        Point::new(pt.x.clamp(self.x, self.right()), pt.y.clamp(self.y, self.bottom()))
    }
}

/// How a rectangle sits relative to a boundary outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Entirely within the outline.
    Inside,
    /// Overlaps the outline but crosses its edge.
    Partial,
    /// No overlap with the outline at all.
    Outside,
}

/// A concrete boundary region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Rect(Rect),
    Circle { center: Point, radius: f64 },
}

impl Outline {
    /// Inclusive point containment.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Rect(r) => r.contains(pt),
            Self::Circle { center, radius } => dist_sq(pt, *center) <= radius * radius,
        }
    }

    /// Smallest axis-aligned rectangle enclosing the outline.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Circle { center, radius } => {
                Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
            }
        }
    }

    /// Classify `rect` against this outline.
    ///
    /// Shapes that only touch along an edge or at a point count as `Outside`.
    #[must_use]
    pub fn placement(&self, rect: Rect) -> Placement {
        match self {
            Self::Rect(outer) => {
                let overlaps = rect.x < outer.right()
                    && rect.right() > outer.x
                    && rect.y < outer.bottom()
                    && rect.bottom() > outer.y;
                if !overlaps {
                    Placement::Outside
                } else if rect.corners().iter().all(|c| outer.contains(*c)) {
                    Placement::Inside
                } else {
                    Placement::Partial
                }
            }
            Self::Circle { center, radius } => {
                let r_sq = radius * radius;
                let nearest = rect.clamp_point(*center);
                if dist_sq(nearest, *center) >= r_sq {
                    Placement::Outside
                } else if rect.corners().iter().all(|c| dist_sq(*c, *center) <= r_sq) {
                    Placement::Inside
                } else {
                    Placement::Partial
                }
            }
        }
    }
}

fn dist_sq(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
