//! Render transform output.
//!
//! The host applies the view as a single transform on one element, composed
//! left to right:
//!
//! ```text
//! translate(tx, ty) rotate(θ) scale(s)
//! ```
//!
//! with the element's transform origin at its own center. A point `p` of the
//! untransformed element whose center is `o` lands on screen at:
//!
//! ```text
//! screen = o + t + R(θ) * s * (p - o)
//! ```
//!
//! Rotation follows CSS: positive degrees turn clockwise on a y-down screen.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::state::ViewState;

/// The transform a host should apply to the rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineDescriptor {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
}

/// Build the render transform for a view state.
pub fn compute_render_transform(state: &ViewState) -> AffineDescriptor {
    AffineDescriptor {
        translate_x: state.translate_x,
        translate_y: state.translate_y,
        rotation_deg: state.rotation_deg,
        scale: state.scale,
    }
}

impl AffineDescriptor {
    /// Format as a CSS `transform` value.
    ///
    /// # Example
    ///
    /// ```text
    /// translate(0px, 10px) rotate(0deg) scale(1.2)
    /// ```
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg) scale({})",
            self.translate_x, self.translate_y, self.rotation_deg, self.scale
        )
    }

    /// The equivalent CSS `matrix(a, b, c, d, e, f)` components, for an
    /// element whose transform origin is its own center.
    pub fn to_matrix(&self) -> [f64; 6] {
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        [
            self.scale * cos,
            self.scale * sin,
            -self.scale * sin,
            self.scale * cos,
            self.translate_x,
            self.translate_y,
        ]
    }

    /// Map an untransformed point to the screen, for an element centered at
    /// `origin`.
    pub fn project(&self, point: Point, origin: Point) -> Point {
        let [a, b, c, d, e, f] = self.to_matrix();
        let dx = point.x - origin.x;
        let dy = point.y - origin.y;
        Point::new(
            origin.x + a * dx + c * dy + e,
            origin.y + b * dx + d * dy + f,
        )
    }

    /// Inverse of [`project`](Self::project).
    ///
    /// Returns `None` when the scale is zero or not finite.
    pub fn unproject(&self, screen: Point, origin: Point) -> Option<Point> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        let dx = screen.x - origin.x - self.translate_x;
        let dy = screen.y - origin.y - self.translate_y;
        // Rotate by -θ, then undo the scale
        let ux = (cos * dx + sin * dy) / self.scale;
        let uy = (-sin * dx + cos * dy) / self.scale;
        Some(Point::new(origin.x + ux, origin.y + uy))
    }
}

impl From<ViewState> for AffineDescriptor {
    fn from(state: ViewState) -> Self {
        compute_render_transform(&state)
    }
}
