//! The view state produced by gestures.

use serde::{Deserialize, Serialize};

/// Current scale, rotation and translation of the viewed image.
///
/// `scale` always lies inside the engine's configured bounds. Rotation is
/// never wrapped, and translation is unconstrained, so the image may be
/// panned fully off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Uniform scale factor (1.0 = natural size)
    pub scale: f64,
    /// Accumulated rotation in degrees
    pub rotation_deg: f64,
    /// Horizontal offset in screen pixels
    pub translate_x: f64,
    /// Vertical offset in screen pixels
    pub translate_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewState {
    /// The canonical state every newly loaded image starts from.
    pub const IDENTITY: ViewState = ViewState {
        scale: 1.0,
        rotation_deg: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Create the identity state.
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Check if this is the identity state
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns true if no field is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite()
            && self.rotation_deg.is_finite()
            && self.translate_x.is_finite()
            && self.translate_y.is_finite()
    }
}
