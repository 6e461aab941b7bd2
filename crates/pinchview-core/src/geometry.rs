//! Screen-space geometry primitives used by the gesture engine.
//!
//! # Coordinate System
//!
//! - Points are in screen pixels, the same space the host reports touches in
//! - Origin is top-left, y grows downward
//! - Angles are in degrees, measured with `atan2`, so positive angles turn
//!   clockwise on screen

use serde::{Deserialize, Serialize};

/// A screen-space coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The container's untransformed box, in the same space as touch points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    /// Left edge in screen pixels
    pub left: f64,
    /// Top edge in screen pixels
    pub top: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// A rect is usable when every edge is finite and the size is not negative.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle of the segment `p1 -> p2` in degrees.
///
/// The range is whatever `atan2` gives, (-180, 180]. No further
/// normalization is applied.
#[inline]
pub fn angle_degrees(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

/// Point halfway between `p1` and `p2`.
#[inline]
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}
