use glint_core::math::IVec2;

use super::label::Label;
use super::radio_button::RadioButton;
use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};

/// One choice in a [`RadioGroup`].
#[derive(Debug, Clone)]
pub struct RadioOption {
    pub button: RadioButton,
    pub label: Label,
    pub value_id: i32,
}

impl RadioOption {
    pub fn new(label: Label, value_id: i32) -> Self {
        Self {
            button: RadioButton::new(),
            label,
            value_id,
        }
    }

    pub fn with_button(mut self, button: RadioButton) -> Self {
        self.button = button;
        self
    }
}

/// A horizontal row of mutually exclusive radio buttons.
///
/// Options are laid out left to right from the group position, each label
/// followed by `spacing` pixels before the next button.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    position: IVec2,
    spacing: i32,
    options: Vec<RadioOption>,
    selected: Option<i32>,
    enabled: bool,
}

impl RadioGroup {
    pub const DEFAULT_SPACING: i32 = 30;
    /// Gap between a button's right edge and its label.
    const LABEL_GAP: i32 = 10;

    pub fn new(spacing: i32) -> Self {
        Self {
            position: IVec2::ZERO,
            spacing,
            options: Vec::new(),
            selected: None,
            enabled: true,
        }
    }

    /// Append an option. Ignored if the id is negative or already present.
    pub fn add_option(&mut self, mut option: RadioOption) -> bool {
        if option.value_id < 0 || self.contains(option.value_id) {
            tracing::debug!(value_id = option.value_id, "radio option rejected");
            return false;
        }
        place(&mut option, self.options.last(), self.position, self.spacing);
        option.button.set_selected(false);
        self.options.push(option);
        true
    }

    /// Remove an option and close the gap it leaves.
    pub fn remove_option(&mut self, value_id: i32) -> bool {
        let Some(index) = self.options.iter().position(|o| o.value_id == value_id) else {
            return false;
        };
        self.options.remove(index);
        if self.selected == Some(value_id) {
            self.selected = None;
        }
        self.relayout();
        true
    }

    /// Select the option with `value_id`; a negative or unknown id clears the
    /// selection.
    pub fn set_selected_option(&mut self, value_id: i32) {
        self.selected = if value_id >= 0 && self.contains(value_id) {
            Some(value_id)
        } else {
            None
        };
        self.sync_buttons();
    }

    pub fn selected_option(&self) -> Option<i32> {
        self.selected
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
        self.relayout();
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
        self.relayout();
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    pub fn option(&self, value_id: i32) -> Option<&RadioOption> {
        self.options.iter().find(|o| o.value_id == value_id)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn contains(&self, value_id: i32) -> bool {
        self.options.iter().any(|o| o.value_id == value_id)
    }

    fn relayout(&mut self) {
        // Each option is placed relative to its predecessor, so walk in order.
        for index in 0..self.options.len() {
            let (before, rest) = self.options.split_at_mut(index);
            place(&mut rest[0], before.last(), self.position, self.spacing);
        }
    }

    fn sync_buttons(&mut self) {
        for option in &mut self.options {
            option.button.set_selected(self.selected == Some(option.value_id));
        }
    }
}

fn place(option: &mut RadioOption, previous: Option<&RadioOption>, origin: IVec2, spacing: i32) {
    let radius = option.button.diameter() / 2;
    let x = match previous {
        Some(prev) => prev.label.position().x + prev.label.size().x + radius + spacing,
        None => origin.x + radius,
    };
    option.button.set_position(IVec2::new(x, origin.y));
    let label_height = option.label.size().y;
    option
        .label
        .set_position(IVec2::new(x + radius + RadioGroup::LABEL_GAP, origin.y + label_height / 2));
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPACING)
    }
}

impl Component for RadioGroup {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let mut clicked = None;
        for option in &mut self.options {
            option.button.update(ctx);
            if clicked.is_none() && option.button.was_clicked() {
                clicked = Some(option.value_id);
            }
        }

        if let Some(value_id) = clicked
            && self.selected != Some(value_id)
        {
            tracing::trace!(value_id, "radio option selected");
            self.selected = Some(value_id);
        }
        self.sync_buttons();
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        for option in &self.options {
            option.button.render(ctx);
            option.label.render(ctx);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
