//! Touch gesture handling: one-finger pan, two-finger pinch and rotate.
//!
//! The host forwards every touch event to a [`ViewportTransformEngine`]
//! as an ordered slice of screen-space points. The engine keeps a
//! [`GestureSession`] per continuous interaction and mutates its
//! [`ViewState`](crate::state::ViewState) in place.
//!
//! # Session Lifecycle
//!
//! ```text
//! Idle --1 down--> Panning --up--> Idle
//! Idle --2 down--> Pinching --one lifted--> Panning --last lifted--> Idle
//! Panning --second down--> Pinching (fresh baseline)
//! ```
//!
//! Events whose touch count does not match the session are ignored.

mod engine;
mod types;

pub use engine::ViewportTransformEngine;
pub use types::{GestureError, GesturePhase, GestureSession};
