//! Pinchview WASM - WebAssembly bindings for Pinchview
//!
//! This crate exposes the pinchview-core gesture engine to the page that
//! shows the image. The page owns the file picker, image loading and DOM;
//! it only forwards touch lists here and applies the transform it gets back.
//!
//! # Module Structure
//!
//! - `engine` - `JsViewportEngine`, the touch handler wrapper
//! - `types` - conversions between flat JS buffers and core types
//! - `logger` - forwards `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsViewportEngine } from '@pinchview/wasm';
//!
//! await init();
//!
//! const engine = JsViewportEngine.with_options({ minScale: 0.5, maxScale: 30 });
//! image.onload = () => {
//!   container.style.transform = engine.reset_view();
//! };
//! ```

use wasm_bindgen::prelude::*;

mod engine;
mod logger;
mod types;

pub use engine::JsViewportEngine;
pub use types::JsViewState;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init(logger::default_level());
}

/// Change the console log level (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"` or `"trace"`). Returns false for unknown names.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logger::parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            true
        }
        None => false,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_set_log_level_rejects_unknown() {
        assert!(!set_log_level("chatty"));
    }

    #[test]
    fn test_set_log_level_accepts_known() {
        assert!(set_log_level("warn"));
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
    }
}
