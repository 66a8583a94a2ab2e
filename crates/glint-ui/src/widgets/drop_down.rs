use std::ops::Range;
use std::sync::Arc;

use glint_core::math::{IVec2, Vec2, model_matrix, model_matrix_rotated};
use glint_render::{Color, Font, Shape, Viewport};

use super::push_button::PushButton;
use super::textbox::TextBox;
use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};
use crate::focus::{FocusState, Focusable};
use crate::palette::Interaction;

const HINT_EMPTY: &str = "No options available";
const HINT_SELECT: &str = "Select an option";

#[derive(Debug)]
struct DropDownOption {
    value_id: i32,
    button: PushButton,
}

/// A read-only box that opens a scrollable list of options below itself.
///
/// The box is a [`TextBox`] with input disabled; clicking it requests focus
/// from the frame, and the list is shown while the box is focused. Picking an
/// option copies its text into the box and closes the list.
#[derive(Debug)]
pub struct DropDown {
    font: Arc<Font>,
    font_size: u32,
    display: TextBox,
    options: Vec<DropDownOption>,
    selected: Option<i32>,
    offset: f32,
    max_visible: usize,
    separator_color: Color,
    separator_inset: f32,
    focus: FocusState,
    enabled: bool,
}

impl DropDown {
    pub const SEPARATOR_COLOR: Color = Color::gray(0.8);
    pub const ARROW_COLOR: Color = Color::gray(0.196);
    const ARROW_SIZE: Vec2 = Vec2::new(20.0, 15.0);
    const ARROW_MARGIN: i32 = 20;

    /// The number of options shown at once is derived from how much of
    /// `viewport` lies below the box.
    pub fn new(viewport: &Viewport, font: Arc<Font>, font_size: u32) -> Self {
        let mut display = TextBox::new(font.clone(), font_size, HINT_EMPTY, true);
        display.set_input_state(false);
        display.set_border_color(
            Color::BLACK,
            Interaction::BASE | Interaction::HOVERED | Interaction::CLICKED,
        );

        let mut drop_down = Self {
            font,
            font_size,
            display,
            options: Vec::new(),
            selected: None,
            offset: 0.0,
            max_visible: 0,
            separator_color: Self::SEPARATOR_COLOR,
            separator_inset: crate::UiConfig::default().option_separator_inset,
            focus: FocusState::new(),
            enabled: true,
        };
        drop_down.recalculate_max_visible_options(viewport);
        drop_down
    }

    /// Fit as many option rows as the viewport has room for below the box.
    pub fn recalculate_max_visible_options(&mut self, viewport: &Viewport) {
        let row = self.display.size().y;
        if row <= 0 {
            self.max_visible = 0;
            return;
        }
        let room = viewport.size().y as f32 - self.display.position().y as f32 - row as f32 / 2.0;
        self.max_visible = (room / row as f32).max(0.0) as usize;
        self.clamp_offset();
    }

    pub fn set_max_visible_options(&mut self, count: usize) {
        self.max_visible = count;
        self.clamp_offset();
    }

    pub fn max_visible_options(&self) -> usize {
        self.max_visible
    }

    /// Append an option. Ignored if the id is negative or already present.
    pub fn add_option(&mut self, text: impl Into<String>, value_id: i32) -> bool {
        if value_id < 0 || self.contains(value_id) {
            tracing::debug!(value_id, "drop-down option rejected");
            return false;
        }
        if self.options.is_empty() {
            self.display.set_hint_text(HINT_SELECT);
        }

        let mut button = PushButton::new(text, self.font.clone(), self.font_size);
        button.set_enabled(false);
        button.set_size(self.display.size());
        for state in [Interaction::BASE, Interaction::HOVERED, Interaction::CLICKED] {
            button.set_color(self.display.color(state), state);
        }
        button.set_border_thickness(0);

        self.options.push(DropDownOption { value_id, button });
        true
    }

    /// Remove an option, clearing the selection if it was the selected one.
    pub fn remove_option(&mut self, value_id: i32) -> bool {
        let Some(index) = self.options.iter().position(|o| o.value_id == value_id) else {
            return false;
        };
        self.options.remove(index);
        if self.selected == Some(value_id) {
            self.set_current_selected(-1);
        }
        if self.options.is_empty() {
            self.display.set_hint_text(HINT_EMPTY);
        }
        self.clamp_offset();
        true
    }

    /// Remove every option, clear the selection and close the list.
    pub fn clear_selection_list(&mut self) {
        self.display.set_hint_text(HINT_EMPTY);
        self.display.set_focus_state(false);
        self.options.clear();
        self.set_current_selected(-1);
        self.offset = 0.0;
    }

    /// Select the option with `value_id` and show its text. A negative id
    /// clears the selection; an unknown id is ignored.
    pub fn set_current_selected(&mut self, value_id: i32) {
        if value_id < 0 {
            self.display.set_input_text("");
            self.selected = None;
            return;
        }
        if let Some(option) = self.options.iter().find(|o| o.value_id == value_id) {
            let text = option.button.text().to_string();
            self.display.set_input_text(text);
            self.selected = Some(value_id);
        }
    }

    pub fn selected_option(&self) -> Option<i32> {
        self.selected
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.display.set_position(position);
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.display.set_size(size);
        for option in &mut self.options {
            option.button.set_size(size);
        }
    }

    pub fn set_color(&mut self, color: Color, states: Interaction) {
        self.display.set_color(color, states);
        for option in &mut self.options {
            option.button.set_color(color, states);
        }
    }

    pub fn set_border_color(&mut self, color: Color, states: Interaction) {
        self.display.set_border_color(color, states);
    }

    pub fn set_border_thickness(&mut self, thickness: i32) {
        self.display.set_border_thickness(thickness);
    }

    pub fn set_separator_color(&mut self, color: Color) {
        self.separator_color = color;
    }

    pub fn position(&self) -> IVec2 {
        self.display.position()
    }

    pub fn size(&self) -> IVec2 {
        self.display.size()
    }

    pub fn color(&self, state: Interaction) -> Color {
        self.display.color(state)
    }

    pub fn border_color(&self, state: Interaction) -> Color {
        self.display.border_color(state)
    }

    pub fn border_thickness(&self) -> i32 {
        self.display.border_thickness()
    }

    pub fn separator_color(&self) -> Color {
        self.separator_color
    }

    /// The box showing the current selection.
    pub fn display(&self) -> &TextBox {
        &self.display
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn option_text(&self, value_id: i32) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value_id == value_id)
            .map(|o| o.button.text())
    }

    /// Whether the option list is showing.
    pub fn is_open(&self) -> bool {
        self.display.is_focused()
    }

    /// Scroll position in options, between zero and `option_count - max_visible`.
    pub fn options_offset(&self) -> f32 {
        self.offset
    }

    /// Indices of the options currently shown.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset as usize;
        let end = (start + self.max_visible).min(self.options.len());
        start.min(end)..end
    }

    fn max_offset(&self) -> f32 {
        self.options.len().saturating_sub(self.max_visible) as f32
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    fn contains(&self, value_id: i32) -> bool {
        self.options.iter().any(|o| o.value_id == value_id)
    }

    fn scroll(&mut self, delta: f32, step: f32) {
        if delta > 0.0 {
            self.offset = (self.offset - step).max(0.0);
        } else if delta < 0.0 {
            self.offset = (self.offset + step).min(self.max_offset());
        } else {
            return;
        }
        tracing::trace!(offset = self.offset, "drop-down scrolled");
    }

    fn update_open_list(&mut self, ctx: &mut UpdateContext<'_>) -> Option<i32> {
        let scroll = ctx.input.take_scroll_delta().y;
        self.scroll(scroll, ctx.config.scroll_step);

        let range = self.visible_range();
        let origin = self.display.position();
        let top = origin.y + self.display.border_thickness() / 2;
        let mut picked = None;
        for (row, option) in self.options[range].iter_mut().enumerate() {
            let height = option.button.size().y;
            option
                .button
                .set_position(IVec2::new(origin.x, top + (row as i32 + 1) * height));
            option.button.set_enabled(true);
            option.button.update(ctx);
            if picked.is_none() && option.button.was_clicked() {
                picked = Some(option.value_id);
            }
        }
        picked
    }
}

impl Focusable for DropDown {
    fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    fn focus_state_mut(&mut self) -> &mut FocusState {
        &mut self.focus
    }

    fn cancel_focus_request(&mut self) {
        self.focus.cancel_request();
        self.display.cancel_focus_request();
    }
}

impl Component for DropDown {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.separator_inset = ctx.config.option_separator_inset;
        if self.focus.gained_focus() {
            self.display.set_focus_state(true);
        } else if self.focus.lost_focus() {
            self.display.set_focus_state(false);
        }

        if self.display.has_requested_focus() && !ctx.primary_down() {
            self.focus.request();
        }

        if self.display.is_focused() {
            if let Some(value_id) = self.update_open_list(ctx) {
                tracing::trace!(value_id, "drop-down option picked");
                self.set_current_selected(value_id);
                self.display.set_focus_state(false);
            }
        } else {
            self.focus.release_quietly();
            for option in &mut self.options {
                option.button.set_enabled(false);
            }
        }

        self.display.update(ctx);
        self.focus.reset_edges();
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        self.display.render(ctx);
        if !self.display.is_focused() {
            return;
        }

        let range = self.visible_range();
        let last = range.end.saturating_sub(1);
        for index in range {
            let button = &self.options[index].button;
            button.render(ctx);

            if index < last {
                let position = button.position();
                let size = button.size();
                let center = Vec2::new(position.x as f32, (position.y + size.y / 2) as f32);
                let width = size.x as f32 - self.separator_inset;
                ctx.backend
                    .draw_shape(Shape::Line, model_matrix(center, Vec2::new(width, 1.0)), self.separator_color);
            }
        }

        if self.options.len() > self.max_visible {
            let position = self.display.position();
            let size = self.display.size();
            let x = (position.x + size.x / 2 - Self::ARROW_MARGIN) as f32;

            if self.offset as usize > 0 {
                let up = Vec2::new(x, (position.y + size.y) as f32);
                ctx.backend.draw_shape(
                    Shape::Triangle,
                    model_matrix_rotated(up, Self::ARROW_SIZE, 180.0),
                    Self::ARROW_COLOR,
                );
            }
            if ((self.offset + self.max_visible as f32) as usize) < self.options.len() {
                let down = Vec2::new(x, (position.y + self.max_visible as i32 * size.y) as f32);
                ctx.backend
                    .draw_shape(Shape::Triangle, model_matrix(down, Self::ARROW_SIZE), Self::ARROW_COLOR);
            }
        }
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
