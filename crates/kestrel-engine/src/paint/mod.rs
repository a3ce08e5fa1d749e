//! Colour types consumed by GUI elements.

mod color;

pub use color::Color;
