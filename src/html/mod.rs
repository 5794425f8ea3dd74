//! HTML output.
//!
//! - [`escape`]: pure escaping of literal text
//! - [`render`]: document tree → HTML fragment serialization
//!
//! Escaping happens at serialization, by construction: parsed literal text
//! cannot reach the output unescaped. The single deliberate exception is
//! the raw-HTML passthrough block (a segment whose first character is `<`).

mod escape;
mod render;

pub use escape::escape_html;
pub use render::{render_document, render_html};
