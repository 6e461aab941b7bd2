//! Gesture session types and the errors a gesture step can hit.

use std::fmt;

use thiserror::Error;

use crate::geometry::Point;

/// Reasons a gesture event was not (fully) applied.
///
/// These never reach the user. The engine logs them and keeps the view
/// state numerically valid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    /// The pinch baseline or the current finger pair has (near) zero length.
    #[error("Degenerate gesture: touch points coincide")]
    DegenerateGesture,

    /// The event's touch count does not match the open session.
    #[error("Unexpected {touches} touch(es) while {phase}")]
    InconsistentTouchCount { phase: GesturePhase, touches: usize },

    /// A touch coordinate was NaN or infinite.
    #[error("Touch coordinates must be finite")]
    NonFiniteInput,
}

/// Which kind of gesture is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Panning,
    Pinching,
}

impl GesturePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            GesturePhase::Idle => "idle",
            GesturePhase::Panning => "panning",
            GesturePhase::Pinching => "pinching",
        }
    }
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient tracking data for one continuous touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureSession {
    #[default]
    Idle,
    /// One-finger drag.
    Panning {
        /// Touch position when the drag (re)started
        start: Point,
        /// Translation at that instant
        start_translate: Point,
    },
    /// Two-finger pinch/rotate. Every field is re-based after each frame.
    Pinching {
        /// Finger distance at the previous frame
        initial_distance: f64,
        /// Finger angle at the previous frame minus the rotation it produced
        initial_angle_offset: f64,
        /// Finger midpoint at the previous frame
        last_center: Point,
    },
}

impl GestureSession {
    pub fn phase(&self) -> GesturePhase {
        match self {
            GestureSession::Idle => GesturePhase::Idle,
            GestureSession::Panning { .. } => GesturePhase::Panning,
            GestureSession::Pinching { .. } => GesturePhase::Pinching,
        }
    }

    /// The drag anchor, `start - start_translate`.
    ///
    /// Subtracting it from a touch position yields the translation.
    pub fn anchor(&self) -> Option<Point> {
        match self {
            GestureSession::Panning {
                start,
                start_translate,
            } => Some(Point::new(
                start.x - start_translate.x,
                start.y - start_translate.y,
            )),
            _ => None,
        }
    }
}
