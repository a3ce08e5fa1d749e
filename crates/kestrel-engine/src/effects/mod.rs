//! Numeric sprite effects.
//!
//! Effects only compute values (opacity multipliers, sprite-sheet source
//! rectangles); applying them at draw time is the renderer's job.

mod fade;
mod sprite_sheet;

pub use fade::FadeEffect;
pub use sprite_sheet::{FrameCoord, SpriteSheetEffect, SpriteSheetError};
