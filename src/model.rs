//! Core data models for the touch tracker.
//! All positions are in virtual stage space unless a type says otherwise.

use serde::{Deserialize, Serialize};

/// Identifier the host input system assigns to one physical contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchId(pub i32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle in virtual space. Expected `left <= right` and `bottom <= top`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Inclusive on every edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}

/// On-screen rectangle of the touch surface, in client pixels (as `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    /// True when the rectangle cannot be used as a mapping denominator.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// The queried object: its position plus its bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTarget {
    pub x: f64,
    pub y: f64,
    pub bounds: Bounds,
}

impl QueryTarget {
    /// Target whose bounds are a `width` x `height` box centered on `(x, y)`.
    pub fn centered(x: f64, y: f64, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            x,
            y,
            bounds: Bounds {
                left: x - hw,
                right: x + hw,
                top: y + hh,
                bottom: y - hh,
            },
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One contact as reported by the host, still in client pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawTouch {
    pub id: TouchId,
    pub pixel_x: f64,
    pub pixel_y: f64,
}
