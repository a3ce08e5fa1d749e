//! Text layout.
//!
//! [`wrap_text`] inserts line breaks given any width oracle; [`FontSystem`]
//! supplies one backed by fontdue glyph metrics.

mod font_system;
mod wrap;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use wrap::{wrap_lines, wrap_text, PARAGRAPH_BREAK};
