//! JavaScript-friendly conversions for touch input and view output.

use pinchview_core::{Point, ViewState};
use serde::Serialize;

/// View state as handed to JavaScript via serde_wasm_bindgen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsViewState {
    pub scale: f64,
    pub rotation_deg: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl From<ViewState> for JsViewState {
    fn from(state: ViewState) -> Self {
        Self {
            scale: state.scale,
            rotation_deg: state.rotation_deg,
            translate_x: state.translate_x,
            translate_y: state.translate_y,
        }
    }
}

/// Convert a flat `[x0, y0, x1, y1, ...]` buffer into points.
///
/// The host passes touch lists this way to avoid allocating one JS object
/// per touch. A trailing odd value is dropped.
pub(crate) fn points_from_flat(coords: &[f64]) -> Vec<Point> {
    coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}
