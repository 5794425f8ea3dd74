//! WASM bindings for in-browser formatting.
//!
//! This module exposes the formatter and estimator to JavaScript via
//! wasm-bindgen, so a static site can render article text client-side.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render dialect source text to an HTML fragment.
#[wasm_bindgen]
pub fn render_html(source: &str) -> String {
    crate::html::render_html(source)
}

/// Estimate reading time in minutes for source text.
#[wasm_bindgen]
pub fn reading_time(source: &str) -> u32 {
    crate::readtime::estimate_reading_time(source)
}

/// Count words in source text after stripping markup punctuation.
#[wasm_bindgen]
pub fn word_count(source: &str) -> usize {
    crate::readtime::word_count(source)
}
