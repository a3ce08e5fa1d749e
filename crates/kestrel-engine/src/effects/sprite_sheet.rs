use std::fmt;

use crate::coords::{Point, Rect, Size};

/// Error returned by [`SpriteSheetEffect::load`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SpriteSheetError {
    pub frame_amount: Size,
}

impl fmt::Display for SpriteSheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sprite sheet frame amount {}x{} must be non-zero",
            self.frame_amount.width, self.frame_amount.height
        )
    }
}

impl std::error::Error for SpriteSheetError {}

/// Column/row of a frame within a sprite sheet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameCoord {
    pub column: u32,
    pub row: u32,
}

/// Steps through a grid of equally sized frames.
///
/// Frames advance left to right, then top to bottom, wrapping to the first
/// frame after the last one.
#[derive(Debug, Clone)]
pub struct SpriteSheetEffect {
    /// Milliseconds accumulated toward the next frame switch.
    pub frame_counter: u32,
    /// Milliseconds each frame is shown.
    pub switch_frame: u32,
    pub current_frame: FrameCoord,
    /// Columns and rows in the sheet.
    pub frame_amount: Size,
    frame_size: Size,
    active: bool,
}

impl SpriteSheetEffect {
    pub fn new(frame_amount: Size) -> Self {
        Self {
            frame_counter: 0,
            switch_frame: 100,
            current_frame: FrameCoord::default(),
            frame_amount,
            frame_size: Size::default(),
            active: false,
        }
    }

    /// Derives the frame size from the texture size.
    pub fn load(&mut self, texture_size: Size) -> Result<(), SpriteSheetError> {
        self.frame_size = texture_size
            .checked_div(self.frame_amount)
            .ok_or(SpriteSheetError { frame_amount: self.frame_amount })?;
        Ok(())
    }

    #[inline]
    pub fn frame_size(&self) -> Size {
        self.frame_size
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advances the animation by `dt_ms` milliseconds.
    pub fn update(&mut self, dt_ms: u32) {
        if !self.active || self.frame_amount.is_empty() {
            return;
        }

        if self.switch_frame == 0 {
            self.next_frame();
            return;
        }

        self.frame_counter = self.frame_counter.saturating_add(dt_ms);
        while self.frame_counter >= self.switch_frame {
            self.frame_counter -= self.switch_frame;
            self.next_frame();
        }
    }

    fn next_frame(&mut self) {
        let frame = &mut self.current_frame;
        frame.column += 1;
        if frame.column >= self.frame_amount.width {
            frame.column = 0;
            frame.row += 1;
            if frame.row >= self.frame_amount.height {
                frame.row = 0;
            }
        }
    }

    /// Source rectangle of the current frame within the texture.
    pub fn source_rect(&self) -> Rect {
        let origin = Point::new(
            (self.current_frame.column * self.frame_size.width) as i32,
            (self.current_frame.row * self.frame_size.height) as i32,
        );
        Rect::from_origin_size(origin, self.frame_size)
    }
}
