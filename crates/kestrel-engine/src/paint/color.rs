/// Straight-alpha RGBA colour with `f32` channels in `[0, 1]`.
///
/// Elements hand colours to the renderer as-is; premultiplication happens
/// at draw time outside this crate.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// Menu highlight colour.
    pub const GOLD: Color = Color::rgba(1.0, 0.843, 0.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a colour from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Returns the colour with alpha scaled by `opacity` (clamped to `[0, 1]`).
    ///
    /// Fade effects feed their multiplier through here.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { a: (self.a * opacity.clamp(0.0, 1.0)).clamp(0.0, 1.0), ..self }
    }
}
