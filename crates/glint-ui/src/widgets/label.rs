use std::sync::Arc;

use glint_core::math::{IVec2, Vec2};
use glint_render::{Color, Font, TextRun};

use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};

/// A single line of text.
///
/// The position is the left end of the baseline. The size is re-measured
/// whenever the text, font or font size changes.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    color: Color,
    font: Option<Arc<Font>>,
    font_size: u32,
    position: IVec2,
    size: IVec2,
    enabled: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, color: Color, font: Option<Arc<Font>>, font_size: u32) -> Self {
        let mut label = Self {
            text: text.into(),
            color,
            font,
            font_size,
            position: IVec2::ZERO,
            size: IVec2::ZERO,
            enabled: true,
        };
        label.measure();
        label
    }

    fn measure(&mut self) {
        self.size = match &self.font {
            Some(font) => font.measure(&self.text, self.font_size),
            None => IVec2::ZERO,
        };
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.measure();
    }

    pub fn set_font(&mut self, font: Option<Arc<Font>>) {
        self.font = font;
        self.measure();
    }

    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = font_size;
        self.measure();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Color {
        self.color
    }

    pub fn font(&self) -> Option<&Arc<Font>> {
        self.font.as_ref()
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// Draw with an explicit colour, leaving the label's own colour alone.
    pub(crate) fn draw_with_color(&self, ctx: &mut RenderContext<'_>, color: Color) {
        let Some(font) = &self.font else {
            return;
        };
        if self.text.is_empty() || self.font_size == 0 {
            return;
        }
        ctx.backend.draw_text(&TextRun {
            font,
            text: &self.text,
            position: Vec2::new(self.position.x as f32, self.position.y as f32),
            font_size: self.font_size,
            color,
        });
    }
}

impl Component for Label {
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {}

    fn render(&self, ctx: &mut RenderContext<'_>) {
        self.draw_with_color(ctx, self.color);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
