//! Hover and click detection shared by the button-like widgets.

use glint_core::math::{IVec2, Vec2};

/// Where the pointer stands relative to a widget this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    /// Cursor outside the widget
    Away,
    /// Cursor inside, button up
    Hovering,
    /// Cursor inside, button went up this frame after a press
    Released,
    /// Cursor inside, button went down this frame. The click edge.
    Pressed,
    /// Cursor inside, button still down after a press
    Held,
}

impl PointerState {
    pub fn is_click(self) -> bool {
        self == PointerState::Pressed
    }
}

/// Per-widget press tracking, so one physical press yields one click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTracker {
    held: bool,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Advance one frame. Leaving the widget does not forget a press, so
    /// dragging out and back in while held does not click again.
    pub fn step(&mut self, hovering: bool, button_down: bool) -> PointerState {
        if !hovering {
            return PointerState::Away;
        }
        match (button_down, self.held) {
            (true, false) => {
                self.held = true;
                PointerState::Pressed
            }
            (true, true) => PointerState::Held,
            (false, true) => {
                self.held = false;
                PointerState::Released
            }
            (false, false) => PointerState::Hovering,
        }
    }
}

/// Whether `point` lies inside the rectangle of `size` centred on `center`.
/// Edges count as inside.
pub fn contains_centered(center: IVec2, size: IVec2, point: Vec2) -> bool {
    let offset = (point - center.as_vec2()).abs();
    let half = size.as_vec2() / 2.0;
    offset.x <= half.x && offset.y <= half.y
}

/// Whether `point` lies inside the circle of `diameter` centred on `center`.
pub fn contains_circle(center: IVec2, diameter: i32, point: Vec2) -> bool {
    (point - center.as_vec2()).length() <= diameter as f32 / 2.0
}
