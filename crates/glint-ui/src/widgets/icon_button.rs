use std::sync::Arc;

use glint_core::math::{IVec2, model_matrix};
use glint_render::{Color, Texture};

use super::button::ButtonBase;
use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};
use crate::palette::{Interaction, Palette};

/// A clickable texture, tinted by its interaction palette.
#[derive(Debug)]
pub struct IconButton {
    button: ButtonBase,
    texture: Arc<Texture>,
    enabled: bool,
}

impl IconButton {
    /// Default height; the width keeps the texture's aspect ratio.
    pub const DEFAULT_HEIGHT: f32 = 64.0;
    pub const HOVER_TINT: Color = Color::rgb(1.0, 1.0, 0.4);
    pub const CLICKED_TINT: Color = Color::rgb(1.0, 1.0, 0.0);

    pub fn new(texture: Arc<Texture>) -> Self {
        let scale = if texture.height() > 0 {
            Self::DEFAULT_HEIGHT / texture.height() as f32
        } else {
            0.0
        };
        let size = IVec2::new(
            (texture.width() as f32 * scale) as i32,
            (texture.height() as f32 * scale) as i32,
        );
        let tint = Palette::new(Color::WHITE, Self::HOVER_TINT, Self::CLICKED_TINT);
        Self {
            button: ButtonBase::new(size, tint),
            texture,
            enabled: true,
        }
    }

    pub fn set_texture(&mut self, texture: Arc<Texture>) {
        self.texture = texture;
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.button.set_position(position);
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.button.set_size(size);
    }

    pub fn set_color(&mut self, color: Color, states: Interaction) {
        self.button.set_color(color, states);
    }

    pub fn set_click_callback(&mut self, callback: impl FnMut() + 'static) {
        self.button.set_click_callback(callback);
    }

    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    pub fn position(&self) -> IVec2 {
        self.button.position()
    }

    pub fn size(&self) -> IVec2 {
        self.button.size()
    }

    pub fn current_color(&self) -> Color {
        self.button.current_color()
    }

    pub fn was_clicked(&self) -> bool {
        self.button.was_clicked()
    }

    pub fn button(&self) -> &ButtonBase {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut ButtonBase {
        &mut self.button
    }
}

impl Component for IconButton {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.button.poll(ctx);
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        let transform = model_matrix(self.button.position().as_vec2(), self.button.size().as_vec2());
        ctx.backend
            .draw_texture(&self.texture, transform, Some(self.button.current_color()));
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
