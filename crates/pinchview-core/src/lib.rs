//! Pinchview Core - touch gesture viewport engine
//!
//! This crate turns one- and two-finger touch gestures into a pan, zoom and
//! rotate transform for a single image shown inside a fixed-size container.
//! The screen point under the user's fingers stays put while scaling.
//!
//! Everything here is synchronous and allocation-free per event. Decoding
//! touch events, loading the image and applying the transform to the page
//! are left to the host.
//!
//! # Usage
//!
//! ```ignore
//! use pinchview_core::{ContainerRect, EngineConfig, Point, ViewportTransformEngine};
//!
//! let mut engine = ViewportTransformEngine::new(EngineConfig::default())?;
//! engine.set_container(ContainerRect::new(0.0, 0.0, 300.0, 300.0));
//!
//! engine.gesture_start(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
//! engine.gesture_move(&[Point::new(90.0, 100.0), Point::new(210.0, 100.0)]);
//! let css = engine.render_transform().to_css();
//! ```

pub mod config;
pub mod geometry;
pub mod gesture;
pub mod render;
pub mod state;

pub use config::{ConfigError, EngineConfig};
pub use geometry::{angle_degrees, distance, midpoint, ContainerRect, Point};
pub use gesture::{GestureError, GesturePhase, GestureSession, ViewportTransformEngine};
pub use render::{compute_render_transform, AffineDescriptor};
pub use state::ViewState;
