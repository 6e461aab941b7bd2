//! The gesture-to-transform engine.
//!
//! # Algorithm
//!
//! Scale is applied to the same element as translate and rotate, about that
//! element's own center. The element's on-screen center is therefore
//! `container_center + translate`, and keeping the image point under the
//! finger centroid `m` fixed while scaling by `k` requires:
//!
//! ```text
//! v = m - (container_center + translate)
//! translate += v * (1 - k)
//! ```
//!
//! Rotation does not enter the correction because a uniform scale commutes
//! with it.

use crate::config::{ConfigError, EngineConfig};
use crate::geometry::{angle_degrees, distance, midpoint, ContainerRect, Point};
use crate::render::{compute_render_transform, AffineDescriptor};
use crate::state::ViewState;

use super::types::{GestureError, GesturePhase, GestureSession};

/// Finger pairs closer than this are treated as coincident.
const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Owns the view state of one image and drives it from touch events.
///
/// All handlers are synchronous and never fail: events that cannot be
/// applied are logged and ignored, leaving the state unchanged.
#[derive(Debug, Clone)]
pub struct ViewportTransformEngine {
    config: EngineConfig,
    container: ContainerRect,
    state: ViewState,
    session: GestureSession,
}

impl Default for ViewportTransformEngine {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default())
    }
}

impl ViewportTransformEngine {
    /// Create an engine with identity state and no container.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the scale bounds are unusable.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Self {
        Self {
            config,
            container: ContainerRect::default(),
            state: ViewState::IDENTITY,
            session: GestureSession::Idle,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn container(&self) -> ContainerRect {
        self.container
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn session(&self) -> GestureSession {
        self.session
    }

    pub fn phase(&self) -> GesturePhase {
        self.session.phase()
    }

    /// Record the container box used as the scaling pivot reference.
    ///
    /// Rects with non-finite edges or negative size are ignored.
    pub fn set_container(&mut self, rect: ContainerRect) {
        if !rect.is_valid() {
            log::warn!("Ignoring invalid container rect {:?}", rect);
            return;
        }
        self.container = rect;
    }

    /// Reset to the identity view and close any open session.
    ///
    /// Hosts call this whenever a new image is loaded.
    pub fn reset_view(&mut self) -> ViewState {
        self.state = ViewState::IDENTITY;
        self.session = GestureSession::Idle;
        log::debug!("View reset");
        self.state
    }

    /// The transform to render for the current state.
    pub fn render_transform(&self) -> AffineDescriptor {
        compute_render_transform(&self.state)
    }

    /// Handle touches going down. `touches` holds every active touch.
    ///
    /// One touch opens a pan session, two open a pinch session. Any other
    /// count is a no-op.
    pub fn gesture_start(&mut self, touches: &[Point]) {
        if let Err(err) = self.try_start(touches) {
            log::debug!("Gesture start ignored: {}", err);
        }
    }

    /// Handle touches moving and return the updated state.
    pub fn gesture_move(&mut self, touches: &[Point]) -> ViewState {
        match self.try_move(touches) {
            Ok(()) => log::trace!("Gesture move -> {:?}", self.state),
            Err(err) => log::debug!("Gesture move ignored: {}", err),
        }
        self.state
    }

    /// Handle touches lifting. `remaining` holds the touches still down.
    ///
    /// Lifting one finger of a pinch re-anchors a pan at the remaining
    /// finger so the drag continues without a jump.
    pub fn gesture_end(&mut self, remaining: &[Point]) {
        if let Err(err) = self.try_end(remaining) {
            log::debug!("Gesture end ignored: {}", err);
        }
    }

    /// The platform aborted the touch sequence. The state is kept.
    pub fn gesture_cancel(&mut self) {
        if self.session != GestureSession::Idle {
            log::debug!("Gesture cancelled while {}", self.phase());
        }
        self.session = GestureSession::Idle;
    }

    fn try_start(&mut self, touches: &[Point]) -> Result<(), GestureError> {
        check_finite(touches)?;
        match touches {
            [touch] => self.begin_pan(*touch),
            [first, second] => self.begin_pinch(*first, *second),
            _ => return Err(self.inconsistent(touches)),
        }
        Ok(())
    }

    fn try_move(&mut self, touches: &[Point]) -> Result<(), GestureError> {
        check_finite(touches)?;
        match (self.session, touches) {
            (
                GestureSession::Panning {
                    start,
                    start_translate,
                },
                [touch],
            ) => {
                // Exact when the finger is back at `start`
                self.state.translate_x = start_translate.x + (touch.x - start.x);
                self.state.translate_y = start_translate.y + (touch.y - start.y);
                Ok(())
            }
            (
                GestureSession::Pinching {
                    initial_distance,
                    initial_angle_offset,
                    last_center,
                },
                [first, second],
            ) => self.pinch_step(
                initial_distance,
                initial_angle_offset,
                last_center,
                *first,
                *second,
            ),
            _ => Err(self.inconsistent(touches)),
        }
    }

    fn try_end(&mut self, remaining: &[Point]) -> Result<(), GestureError> {
        check_finite(remaining)?;
        match remaining {
            [] => {
                if self.session != GestureSession::Idle {
                    log::debug!("Gesture ended while {}", self.phase());
                }
                self.session = GestureSession::Idle;
            }
            [touch] => self.begin_pan(*touch),
            [first, second] => self.begin_pinch(*first, *second),
            _ => return Err(self.inconsistent(remaining)),
        }
        Ok(())
    }

    fn begin_pan(&mut self, touch: Point) {
        if !self.config.pan {
            self.session = GestureSession::Idle;
            return;
        }
        self.session = GestureSession::Panning {
            start: touch,
            start_translate: Point::new(self.state.translate_x, self.state.translate_y),
        };
        log::debug!("Pan started at ({}, {})", touch.x, touch.y);
    }

    /// Open a pinch whose baseline is derived from the current state, so an
    /// existing rotation is resumed rather than reset.
    fn begin_pinch(&mut self, first: Point, second: Point) {
        let initial_distance = distance(first, second);
        self.session = GestureSession::Pinching {
            initial_distance,
            initial_angle_offset: angle_degrees(first, second) - self.state.rotation_deg,
            last_center: midpoint(first, second),
        };
        log::debug!("Pinch started, distance {}", initial_distance);
    }

    /// Apply one pinch frame and re-base the session trackers on it.
    ///
    /// A degenerate finger pair skips scale and rotation for this frame
    /// but still re-bases, so the next well-formed frame scales normally.
    fn pinch_step(
        &mut self,
        initial_distance: f64,
        initial_angle_offset: f64,
        last_center: Point,
        first: Point,
        second: Point,
    ) -> Result<(), GestureError> {
        let new_distance = distance(first, second);
        let new_angle = angle_degrees(first, second);
        let new_center = midpoint(first, second);

        let mut next = self.state;

        if self.config.pan {
            next.translate_x += new_center.x - last_center.x;
            next.translate_y += new_center.y - last_center.y;
        }

        let result = if initial_distance < MIN_PINCH_DISTANCE || new_distance < MIN_PINCH_DISTANCE
        {
            Err(GestureError::DegenerateGesture)
        } else {
            let scale_change = new_distance / initial_distance;
            let new_scale = self.config.clamp_scale(next.scale * scale_change);
            let k = new_scale / next.scale;

            let pivot = self.container.center();
            let vx = new_center.x - (pivot.x + next.translate_x);
            let vy = new_center.y - (pivot.y + next.translate_y);
            next.translate_x += vx * (1.0 - k);
            next.translate_y += vy * (1.0 - k);
            next.scale = new_scale;

            if self.config.rotate {
                let rotation_change = new_angle - initial_angle_offset - next.rotation_deg;
                next.rotation_deg += shortest_turn(rotation_change);
            }
            Ok(())
        };

        if !next.is_finite() {
            return Err(GestureError::NonFiniteInput);
        }

        self.state = next;
        self.session = GestureSession::Pinching {
            initial_distance: new_distance,
            initial_angle_offset: new_angle - next.rotation_deg,
            last_center: new_center,
        };
        result
    }

    fn inconsistent(&self, touches: &[Point]) -> GestureError {
        GestureError::InconsistentTouchCount {
            phase: self.phase(),
            touches: touches.len(),
        }
    }
}

fn check_finite(touches: &[Point]) -> Result<(), GestureError> {
    if touches.iter().all(|t| t.is_finite()) {
        Ok(())
    } else {
        Err(GestureError::NonFiniteInput)
    }
}

/// Map an angle delta into (-180, 180].
///
/// `atan2` jumps by 360 when the finger pair crosses the negative x axis.
fn shortest_turn(delta: f64) -> f64 {
    let turn = delta.rem_euclid(360.0);
    if turn > 180.0 {
        turn - 360.0
    } else {
        turn
    }
}
