use std::sync::Arc;

use glint_render::{Font, Texture};

/// Simulated frame duration for deterministic updates.
pub const FRAME_TIME: f32 = 1.0 / 60.0;

/// A monospace font: at size 32 every glyph is 16 px wide and text is 32 px tall.
pub fn test_font() -> Arc<Font> {
    Arc::new(Font::monospace("mono", 32, 48, 16))
}

/// A white texture of the given size.
pub fn test_texture(width: u32, height: u32) -> Arc<Texture> {
    Arc::new(Texture::solid("test", width, height, [255; 4]))
}
