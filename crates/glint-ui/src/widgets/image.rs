use std::sync::Arc;

use glint_core::math::{IVec2, model_matrix};
use glint_render::Texture;

use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};

/// A texture drawn at its position, centred.
#[derive(Debug, Clone)]
pub struct Image {
    texture: Option<Arc<Texture>>,
    position: IVec2,
    size: IVec2,
    enabled: bool,
}

impl Image {
    /// Size defaults to the texture's pixel size.
    pub fn new(texture: Option<Arc<Texture>>) -> Self {
        let size = texture_size(texture.as_deref());
        Self {
            texture,
            position: IVec2::ZERO,
            size,
            enabled: true,
        }
    }

    /// Replace the texture and reset the size to match it.
    pub fn set_texture(&mut self, texture: Option<Arc<Texture>>) {
        self.size = texture_size(texture.as_deref());
        self.texture = texture;
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.size = size;
    }

    pub fn texture(&self) -> Option<&Arc<Texture>> {
        self.texture.as_ref()
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }
}

fn texture_size(texture: Option<&Texture>) -> IVec2 {
    texture.map_or(IVec2::ZERO, |t| IVec2::new(t.width() as i32, t.height() as i32))
}

impl Component for Image {
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {}

    fn render(&self, ctx: &mut RenderContext<'_>) {
        if let Some(texture) = &self.texture {
            let transform = model_matrix(self.position.as_vec2(), self.size.as_vec2());
            ctx.backend.draw_texture(texture, transform, None);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tracks_texture() {
        let mut image = Image::new(Some(Arc::new(Texture::solid("a", 64, 32, [255; 4]))));
        assert_eq!(image.size(), IVec2::new(64, 32));
        image.set_size(IVec2::new(10, 10));
        image.set_texture(Some(Arc::new(Texture::solid("b", 8, 16, [0; 4]))));
        assert_eq!(image.size(), IVec2::new(8, 16));
        image.set_texture(None);
        assert_eq!(image.size(), IVec2::ZERO);
    }
}
