//! WASM bindings for the viewport engine.
//!
//! The host page forwards `touchstart`, `touchmove`, `touchend` and
//! `touchcancel` to a `JsViewportEngine` and writes the returned CSS
//! transform onto the image container. It must also call `preventDefault`
//! on those events so the browser's own pinch-zoom stays out of the way.

use crate::types::{points_from_flat, JsViewState};
use pinchview_core::{ConfigError, ContainerRect, EngineConfig, ViewportTransformEngine};
use wasm_bindgen::prelude::*;

/// Gesture engine wrapper for JavaScript.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const engine = JsViewportEngine.with_options({ minScale: 0.5, maxScale: 30 });
/// const rect = container.getBoundingClientRect();
/// engine.set_container(rect.left, rect.top, rect.width, rect.height);
///
/// container.addEventListener('touchmove', (e) => {
///   e.preventDefault();
///   container.style.transform = engine.touch_move(flatten(e.touches));
/// }, { passive: false });
/// ```
#[wasm_bindgen]
pub struct JsViewportEngine {
    inner: ViewportTransformEngine,
}

impl Default for JsViewportEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsViewportEngine {
    /// Create an engine with the default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsViewportEngine {
        JsViewportEngine {
            inner: ViewportTransformEngine::default(),
        }
    }

    /// Create an engine with custom scale bounds.
    pub fn with_bounds(min_scale: f64, max_scale: f64) -> Result<JsViewportEngine, JsValue> {
        Self::from_config(EngineConfig::with_bounds(min_scale, max_scale))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create an engine from an options object.
    ///
    /// Recognized fields: `minScale`, `maxScale`, `pan`, `rotate`. Missing
    /// fields take their defaults.
    pub fn with_options(options: JsValue) -> Result<JsViewportEngine, JsValue> {
        let config: EngineConfig = if options.is_undefined() || options.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid engine options: {}", e)))?
        };
        Self::from_config(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the container's untransformed box in client coordinates.
    pub fn set_container(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.inner
            .set_container(ContainerRect::new(left, top, width, height));
    }

    /// Touches went down. `coords` holds every active touch as `x, y` pairs.
    pub fn touch_start(&mut self, coords: &[f64]) {
        self.inner.gesture_start(&points_from_flat(coords));
    }

    /// Touches moved. Returns the CSS transform to apply.
    pub fn touch_move(&mut self, coords: &[f64]) -> String {
        self.inner.gesture_move(&points_from_flat(coords));
        self.transform_css()
    }

    /// Touches lifted. `coords` holds the touches still down.
    pub fn touch_end(&mut self, coords: &[f64]) {
        self.inner.gesture_end(&points_from_flat(coords));
    }

    /// The browser cancelled the touch sequence.
    pub fn touch_cancel(&mut self) {
        self.inner.gesture_cancel();
    }

    /// Reset to the identity view. Call after loading a new image.
    pub fn reset_view(&mut self) -> String {
        self.inner.reset_view();
        self.transform_css()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.state().scale
    }

    /// Accumulated rotation in degrees
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.state().rotation_deg
    }

    #[wasm_bindgen(getter)]
    pub fn translate_x(&self) -> f64 {
        self.inner.state().translate_x
    }

    #[wasm_bindgen(getter)]
    pub fn translate_y(&self) -> f64 {
        self.inner.state().translate_y
    }

    /// Current gesture: `"idle"`, `"panning"` or `"pinching"`.
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.inner.phase().as_str().to_string()
    }

    /// The CSS `transform` value for the current view.
    pub fn transform_css(&self) -> String {
        self.inner.render_transform().to_css()
    }

    /// The CSS `matrix(a, b, c, d, e, f)` components, for use with
    /// `transform-origin: center`.
    pub fn transform_matrix(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.inner.render_transform().to_matrix()[..])
    }

    /// The view state as `{ scale, rotationDeg, translateX, translateY }`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&JsViewState::from(self.inner.state()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsViewportEngine {
    pub(crate) fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: ViewportTransformEngine::new(config)?,
        })
    }
}
