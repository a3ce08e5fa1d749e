//! Integer screen-space geometry.
//!
//! Canonical space:
//! - Physical pixels, integer coordinates
//! - Origin top-left
//! - +X right, +Y down

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
