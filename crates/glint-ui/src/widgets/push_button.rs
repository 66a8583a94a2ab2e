use std::sync::Arc;

use glint_core::math::IVec2;
use glint_render::{Color, Font};

use super::button::ButtonBase;
use super::label::Label;
use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};
use crate::palette::{Interaction, Palette};

/// A rectangular button with a centred text caption.
#[derive(Debug)]
pub struct PushButton {
    button: ButtonBase,
    label: Label,
    text_palette: Palette,
    enabled: bool,
}

impl PushButton {
    pub const BASE_COLOR: Color = Color::rgb(0.011, 0.419, 0.988);
    pub const HOVER_COLOR: Color = Color::rgb(0.011, 0.627, 0.988);
    pub const CLICKED_COLOR: Color = Color::rgb(0.011, 0.89, 0.988);
    /// Padding added to the caption size for the default button size.
    pub const PADDING: i32 = 50;

    pub fn new(text: impl Into<String>, font: Arc<Font>, font_size: u32) -> Self {
        let label = Label::new(text, Color::WHITE, Some(font), font_size);
        let size = label.size() + IVec2::splat(Self::PADDING);
        let fill = Palette::new(Self::BASE_COLOR, Self::HOVER_COLOR, Self::CLICKED_COLOR);
        let mut button = Self {
            button: ButtonBase::new(size, fill),
            label,
            text_palette: Palette::uniform(Color::WHITE),
            enabled: true,
        };
        button.center_label();
        button
    }

    fn center_label(&mut self) {
        let position = self.button.position();
        let text = self.label.size();
        self.label
            .set_position(IVec2::new(position.x - text.x / 2, position.y + text.y / 2));
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.button.set_position(position);
        self.center_label();
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.button.set_size(size);
        self.center_label();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
        self.center_label();
    }

    pub fn set_font(&mut self, font: Arc<Font>) {
        self.label.set_font(Some(font));
        self.center_label();
    }

    pub fn set_font_size(&mut self, font_size: u32) {
        self.label.set_font_size(font_size);
        self.center_label();
    }

    pub fn set_text_color(&mut self, color: Color, states: Interaction) {
        self.text_palette.set(color, states);
    }

    pub fn set_color(&mut self, color: Color, states: Interaction) {
        self.button.set_color(color, states);
    }

    pub fn set_border_color(&mut self, color: Color, states: Interaction) {
        self.button.set_border_color(color, states);
    }

    pub fn set_border_thickness(&mut self, thickness: i32) {
        self.button.set_border_thickness(thickness);
    }

    pub fn set_click_callback(&mut self, callback: impl FnMut() + 'static) {
        self.button.set_click_callback(callback);
    }

    pub fn position(&self) -> IVec2 {
        self.button.position()
    }

    pub fn size(&self) -> IVec2 {
        self.button.size()
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn text_color(&self, state: Interaction) -> Color {
        self.text_palette.get(state)
    }

    pub fn label(&self) -> &Label {
        &self.label
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

impl Component for PushButton {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let state = self.button.poll(ctx);
        let (speed, dt) = ctx.fade();
        self.text_palette.apply(state, speed, dt);
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        let text_color = self.text_palette.current();
        self.button
            .draw_clipped(ctx, |ctx| self.label.draw_with_color(ctx, text_color));
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
