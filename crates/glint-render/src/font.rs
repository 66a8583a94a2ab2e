//! Bitmap font metrics.
//!
//! Glyph metrics are expressed at [`Font::BASE_PIXEL_SIZE`] and scaled
//! linearly to the requested font size. Only printable ASCII is looked up.

use std::sync::Arc;

use glint_core::alloc::HashMap;
use glint_core::math::IVec2;

use crate::Texture;

/// Placement of one glyph, in pixels at the base size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    /// Bitmap width and height
    pub size: IVec2,
    /// Offset from the pen position to the bitmap's top-left corner
    pub bearing: IVec2,
    /// Pen advance to the next glyph
    pub advance: IVec2,
    /// Horizontal offset of the bitmap inside the atlas texture
    pub atlas_offset_x: u32,
}

/// A rasterised font: glyph metrics plus an optional atlas texture.
#[derive(Debug, Clone)]
pub struct Font {
    name: String,
    glyphs: HashMap<char, GlyphMetrics>,
    atlas: Option<Arc<Texture>>,
}

impl Font {
    /// Pixel height the metrics were generated at.
    pub const BASE_PIXEL_SIZE: f32 = 64.0;

    /// Characters a font is expected to provide.
    pub const CHARSET: std::ops::Range<u8> = 32..127;

    pub fn new(name: impl Into<String>, glyphs: impl IntoIterator<Item = (char, GlyphMetrics)>) -> Self {
        Self {
            name: name.into(),
            glyphs: glyphs.into_iter().collect(),
            atlas: None,
        }
    }

    /// Fixed-width font over [`Font::CHARSET`], every glyph `advance` wide and
    /// `ascent + descent` tall. Metrics are at the base size.
    pub fn monospace(name: impl Into<String>, advance: i32, ascent: i32, descent: i32) -> Self {
        let glyphs = Self::CHARSET.enumerate().map(|(i, byte)| {
            let metrics = GlyphMetrics {
                size: IVec2::new(advance, ascent + descent),
                bearing: IVec2::new(0, ascent),
                advance: IVec2::new(advance, 0),
                atlas_offset_x: i as u32 * advance as u32,
            };
            (byte as char, metrics)
        });
        Self::new(name, glyphs)
    }

    pub fn with_atlas(mut self, atlas: Arc<Texture>) -> Self {
        self.atlas = Some(atlas);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atlas(&self) -> Option<&Arc<Texture>> {
        self.atlas.as_ref()
    }

    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(&ch)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Pixel extent of `text` rendered at `font_size`.
    ///
    /// The width sums the advances of every glyph but the last, which
    /// contributes its bearing plus bitmap width. The height spans the tallest
    /// ascent to the deepest descent. Characters without metrics are skipped.
    pub fn measure(&self, text: &str, font_size: u32) -> IVec2 {
        if font_size == 0 {
            return IVec2::ZERO;
        }
        let scale = font_size as f32 / Self::BASE_PIXEL_SIZE;
        let glyphs: Vec<&GlyphMetrics> = text.chars().filter_map(|c| self.glyph(c)).collect();
        let Some((last, rest)) = glyphs.split_last() else {
            return IVec2::ZERO;
        };

        let mut width: f32 = rest.iter().map(|g| g.advance.x as f32 * scale).sum();
        width += (last.bearing.x + last.size.x) as f32 * scale;

        let (ascent, descent) = glyphs.iter().fold((0.0f32, 0.0f32), |(up, down), g| {
            let top = g.bearing.y as f32 * scale;
            let bottom = (g.size.y - g.bearing.y) as f32 * scale;
            (up.max(top), down.max(bottom))
        });

        IVec2::new(width as i32, (ascent + descent) as i32)
    }
}
