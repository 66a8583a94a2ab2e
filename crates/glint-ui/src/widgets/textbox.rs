use std::sync::Arc;

use glint_core::math::IVec2;
use glint_input::KeyCode;
use glint_render::{Color, Font};

use super::button::ButtonBase;
use super::label::Label;
use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};
use crate::focus::{FocusState, Focusable};
use crate::interaction::PointerState;
use crate::palette::{Interaction, Palette};

/// Character shown in place of each character of hidden input.
pub const MASK_CHAR: char = '#';

/// A single-line text field.
///
/// Clicking the field requests focus from the owning frame. While focused it
/// appends typed characters and deletes one character per
/// `backspace_repeat_interval` while Backspace is held. Pressing outside the
/// field drops focus. The hint text shows while the field is empty and
/// unfocused.
#[derive(Debug)]
pub struct TextBox {
    /// Geometry, fill and border. Clicks are handled by the focus logic below.
    frame: ButtonBase,
    hint: Label,
    input: Label,
    buffer: String,
    hint_palette: Palette,
    input_palette: Palette,
    input_enabled: bool,
    input_visible: bool,
    centered: bool,
    focus: FocusState,
    /// Primary button state seen by the previous update.
    was_down: bool,
    backspace_elapsed: f32,
    text_inset: i32,
    enabled: bool,
}

impl TextBox {
    pub const HINT_COLOR: Color = Color::gray(0.4);
    pub const BORDER_COLOR: Color = Color::gray(0.2);
    pub const MIN_SIZE: IVec2 = IVec2::new(250, 50);
    /// Padding added around the hint text for the default size.
    pub const HINT_PADDING: IVec2 = IVec2::new(100, 50);

    pub fn new(font: Arc<Font>, font_size: u32, hint: impl Into<String>, centered: bool) -> Self {
        let hint = Label::new(hint, Self::HINT_COLOR, Some(font.clone()), font_size);
        let input = Label::new("", Color::BLACK, Some(font), font_size);
        let size = Self::MIN_SIZE.max(hint.size() + Self::HINT_PADDING);

        let mut frame = ButtonBase::new(size, Palette::new(Color::gray(0.6), Color::gray(0.8), Color::gray(1.0)));
        frame.set_border_color(
            Self::BORDER_COLOR,
            Interaction::BASE | Interaction::HOVERED | Interaction::CLICKED,
        );

        let mut text_box = Self {
            frame,
            hint,
            input,
            buffer: String::new(),
            hint_palette: Palette::uniform(Self::HINT_COLOR),
            input_palette: Palette::uniform(Color::BLACK),
            input_enabled: true,
            input_visible: true,
            centered,
            focus: FocusState::new(),
            was_down: false,
            backspace_elapsed: f32::INFINITY,
            text_inset: crate::UiConfig::default().text_inset as i32,
            enabled: true,
        };
        text_box.layout_text();
        text_box
    }

    fn layout_text(&mut self) {
        let position = self.frame.position();
        let inset = self.frame.size().x / 2 - self.text_inset;
        for label in [&mut self.input, &mut self.hint] {
            let size = label.size();
            let x = if self.centered {
                position.x - size.x / 2
            } else {
                position.x - inset
            };
            label.set_position(IVec2::new(x, position.y + size.y / 2));
        }
    }

    fn refresh_display(&mut self) {
        if self.input_visible {
            self.input.set_text(self.buffer.clone());
        } else {
            let masked: String = std::iter::repeat_n(MASK_CHAR, self.buffer.chars().count()).collect();
            self.input.set_text(masked);
        }
        self.layout_text();
    }

    /// Replace the entered text.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.refresh_display();
    }

    /// The entered text, unmasked.
    pub fn input_text(&self) -> &str {
        &self.buffer
    }

    /// The text as drawn, masked when input is hidden.
    pub fn displayed_text(&self) -> &str {
        self.input.text()
    }

    /// Allow or block typing. The field still takes focus when blocked.
    pub fn set_input_state(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Show the input, or mask every character with [`MASK_CHAR`].
    pub fn set_input_visibility(&mut self, visible: bool) {
        self.input_visible = visible;
        self.refresh_display();
    }

    pub fn is_input_visible(&self) -> bool {
        self.input_visible
    }

    pub fn set_hint_text(&mut self, text: impl Into<String>) {
        self.hint.set_text(text);
        self.layout_text();
    }

    pub fn hint_text(&self) -> &str {
        self.hint.text()
    }

    pub fn set_text_centered(&mut self, centered: bool) {
        self.centered = centered;
        self.layout_text();
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.frame.set_position(position);
        self.layout_text();
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.frame.set_size(size);
        self.layout_text();
    }

    pub fn set_color(&mut self, color: Color, states: Interaction) {
        self.frame.set_color(color, states);
    }

    /// Hint text has no clicked colour; `CLICKED` is ignored.
    pub fn set_hint_text_color(&mut self, color: Color, states: Interaction) {
        self.hint_palette.set(color, states - Interaction::CLICKED);
    }

    pub fn set_input_text_color(&mut self, color: Color, states: Interaction) {
        self.input_palette.set(color, states);
    }

    pub fn set_border_color(&mut self, color: Color, states: Interaction) {
        self.frame.set_border_color(color, states);
    }

    pub fn set_border_thickness(&mut self, thickness: i32) {
        self.frame.set_border_thickness(thickness);
    }

    pub fn position(&self) -> IVec2 {
        self.frame.position()
    }

    pub fn size(&self) -> IVec2 {
        self.frame.size()
    }

    pub fn color(&self, state: Interaction) -> Color {
        self.frame.color(state)
    }

    pub fn current_color(&self) -> Color {
        self.frame.current_color()
    }

    pub fn hint_text_color(&self, state: Interaction) -> Color {
        self.hint_palette.get(state)
    }

    pub fn input_text_color(&self, state: Interaction) -> Color {
        self.input_palette.get(state)
    }

    pub fn border_color(&self, state: Interaction) -> Color {
        self.frame.border_color(state)
    }

    pub fn border_thickness(&self) -> i32 {
        self.frame.border_thickness()
    }

    pub fn is_text_centered(&self) -> bool {
        self.centered
    }

    pub fn is_cursor_hovering(&self, ctx: &UpdateContext<'_>) -> bool {
        self.frame.is_cursor_hovering(ctx)
    }

    fn set_palettes(&mut self, state: PointerState, ctx: &UpdateContext<'_>) {
        let (speed, dt) = ctx.fade();
        self.frame.apply_palettes(state, speed, dt);
        self.input_palette.apply(state, speed, dt);
        if state != PointerState::Pressed {
            self.hint_palette.apply(state, speed, dt);
        }
    }

    fn handle_typing(&mut self, ctx: &mut UpdateContext<'_>) {
        let typed = ctx.input.take_typed_char();
        match typed {
            Some(ch) if !self.focus.gained_focus() && !ch.is_control() => {
                self.buffer.push(ch);
                self.refresh_display();
            }
            _ => {
                if !self.buffer.is_empty()
                    && ctx.input.is_key_down(KeyCode::Backspace)
                    && self.backspace_elapsed >= ctx.config.backspace_repeat_interval
                {
                    self.buffer.pop();
                    self.backspace_elapsed = 0.0;
                    self.refresh_display();
                }
            }
        }
    }
}

impl Focusable for TextBox {
    fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    fn focus_state_mut(&mut self) -> &mut FocusState {
        &mut self.focus
    }
}

impl Component for TextBox {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.backspace_elapsed += ctx.delta_time;
        self.text_inset = ctx.config.text_inset as i32;

        let down = ctx.primary_down();
        let press_edge = down && !self.was_down;
        self.was_down = down;
        if self.is_cursor_hovering(ctx) {
            if down && !self.focus.is_focused() {
                self.set_palettes(PointerState::Pressed, ctx);
                // Only a fresh press asks for focus.
                if press_edge {
                    self.focus.request();
                }
            } else if !self.focus.is_focused() {
                // Just unfocused while hovering: jump straight to the hover look.
                let state = if self.focus.lost_focus() {
                    PointerState::Released
                } else {
                    PointerState::Hovering
                };
                self.set_palettes(state, ctx);
            }
        } else {
            if down && self.focus.is_focused() {
                self.focus.set(false);
                tracing::trace!("text box unfocused by outside press");
            }
            if !self.focus.is_focused() {
                self.set_palettes(PointerState::Away, ctx);
            }
        }

        if self.focus.is_focused() && self.input_enabled {
            self.handle_typing(ctx);
        }

        self.layout_text();
        self.focus.reset_edges();
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        self.frame.draw_clipped(ctx, |ctx| {
            if !self.input.text().is_empty() {
                self.input.draw_with_color(ctx, self.input_palette.current());
            } else if !self.focus.is_focused() {
                self.hint.draw_with_color(ctx, self.hint_palette.current());
            }
        });
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn as_focusable(&self) -> Option<&dyn Focusable> {
        Some(self)
    }

    fn as_focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}
