use std::fmt;

use super::wrap::wrap_text;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts and answers width queries for text layout.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Advance width of `text` on a single line, in pixels.
    ///
    /// Unknown fonts measure as zero width.
    #[must_use]
    pub fn measure_width(&self, text: &str, id: FontId, size: f32) -> f32 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return 0.0;
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        // Pen position after each glyph, not the bitmap edge: trailing spaces
        // have no bitmap but still advance.
        layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
    }

    /// Width oracle for [`wrap_text`] bound to one font and size.
    pub fn measurer(&self, id: FontId, size: f32) -> impl Fn(&str) -> f32 + '_ {
        move |text: &str| self.measure_width(text, id, size)
    }

    /// Wraps `text` to `max_width` using this font's metrics.
    pub fn wrap(&self, text: &str, id: FontId, size: f32, max_width: f32) -> String {
        wrap_text(self.measurer(id, size), text, max_width)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(&[0u8, 1, 2, 3]).unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(fonts.is_empty());
    }

    #[test]
    fn unknown_font_measures_zero() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure_width("hello", FontId(3), 16.0), 0.0);
    }

    #[test]
    fn unknown_font_wraps_nothing() {
        // Zero-width oracle: everything fits, text comes back unchanged.
        let fonts = FontSystem::new();
        assert_eq!(fonts.wrap("a b c", FontId(0), 16.0, 1.0), "a b c");
    }
}
