//! Kestrel engine crate.
//!
//! Owns the frame-loop facing pieces used by higher layers: per-tick input
//! synthesis, text layout, numeric sprite effects and frame timing.

pub mod input;
pub mod text;
pub mod effects;
pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
