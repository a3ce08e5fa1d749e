//! Image element: the numeric side of drawing a texture region.

use kestrel_engine::coords::{Rect, Size};
use kestrel_engine::effects::{SpriteSheetEffect, SpriteSheetError};
use kestrel_engine::paint::Color;
use kestrel_engine::time::FrameTime;

/// A texture drawn at `size`, optionally animated by a sprite sheet.
///
/// The renderer reads [`source_rect`](Image::source_rect),
/// [`scale`](Image::scale), `rotation` and `tint`.
#[derive(Debug, Clone)]
pub struct Image {
    pub size: Size,
    pub rotation: f32,
    pub tint: Color,
    source_rect: Option<Rect>,
    texture_size: Size,
    effects_active: bool,
    sprite_sheet: Option<SpriteSheetEffect>,
}

impl Image {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            rotation: 0.0,
            tint: Color::WHITE,
            source_rect: None,
            texture_size: Size::default(),
            effects_active: false,
            sprite_sheet: None,
        }
    }

    pub fn rotation(mut self, v: f32) -> Self { self.rotation = v; self }
    pub fn tint(mut self, v: Color) -> Self { self.tint = v; self }
    pub fn source(mut self, v: Rect) -> Self { self.source_rect = Some(v); self }
    pub fn sprite_sheet(mut self, v: SpriteSheetEffect) -> Self { self.sprite_sheet = Some(v); self }

    /// Records the texture size and sizes the sprite-sheet frames from it.
    pub fn load(&mut self, texture_size: Size) -> Result<(), SpriteSheetError> {
        self.texture_size = texture_size;
        if let Some(sheet) = &mut self.sprite_sheet {
            sheet.load(texture_size)?;
        }
        Ok(())
    }

    /// Region of the texture to draw: the current sprite frame when
    /// animating, else the explicit source, else the whole texture.
    pub fn source_rect(&self) -> Rect {
        match (&self.sprite_sheet, self.source_rect) {
            (Some(sheet), _) if self.effects_active => sheet.source_rect(),
            (_, Some(rect)) => rect,
            _ => Rect::from_origin_size(Default::default(), self.texture_size),
        }
    }

    /// Horizontal and vertical scale from source region to `size`.
    /// Zero along an axis whose source extent is zero.
    pub fn scale(&self) -> (f32, f32) {
        let src = self.source_rect().size;
        let axis = |target: u32, source: u32| {
            if source == 0 { 0.0 } else { target as f32 / source as f32 }
        };
        (axis(self.size.width, src.width), axis(self.size.height, src.height))
    }

    pub fn activate_effects(&mut self) {
        self.set_effects_active(true);
    }

    pub fn deactivate_effects(&mut self) {
        self.set_effects_active(false);
    }

    pub fn set_effects_active(&mut self, active: bool) {
        self.effects_active = active;
        if let Some(sheet) = &mut self.sprite_sheet {
            if active { sheet.activate() } else { sheet.deactivate() }
        }
    }

    #[inline]
    pub fn effects_active(&self) -> bool {
        self.effects_active
    }

    pub fn sprite_sheet_effect(&self) -> Option<&SpriteSheetEffect> {
        self.sprite_sheet.as_ref()
    }

    pub fn update(&mut self, time: &FrameTime) {
        if !self.effects_active {
            return;
        }
        if let Some(sheet) = &mut self.sprite_sheet {
            sheet.update(time.dt_millis());
        }
    }
}
