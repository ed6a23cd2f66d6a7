//! Gridpaint Engine - browser pixel-art editor in WASM
//!
//! A fixed 16x16 grid painted on a canvas; every click writes one row into
//! the embedded grid store and the canvas repaints from an ordered scan.
//!
//! Architecture:
//! - domain/ - Color, Pixel, GridConfig
//! - store/  - embedded columnar pixel table (Grid Store)
//! - view/   - draw state, click mapping, repaint planning (Canvas View)
//!             plus the #[wasm_bindgen] facade and DOM wiring

pub mod domain;
pub mod store;
pub mod view;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Gridpaint WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Color, ColorParseError, GridConfig, Pixel};
pub use store::{GridStore, PixelTable, StoreError};
pub use view::facade::PixelCanvas;
pub use view::{CellFill, ViewCore, ViewState};
