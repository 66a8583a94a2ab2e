use bitflags::bitflags;
use glint_render::Color;

use crate::animation::fade_to;
use crate::interaction::PointerState;

bitflags! {
    /// Interaction states a colour applies to. Setters accept any combination.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Interaction: u8 {
        const BASE = 1 << 0;
        const HOVERED = 1 << 1;
        const CLICKED = 1 << 2;
    }
}

/// Colours for each interaction state plus the colour currently shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base: Color,
    pub hovered: Color,
    pub clicked: Color,
    current: Color,
}

impl Palette {
    pub const fn new(base: Color, hovered: Color, clicked: Color) -> Self {
        Self {
            base,
            hovered,
            clicked,
            current: base,
        }
    }

    /// Same colour in every state.
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color, color)
    }

    /// Assign `color` to every state in `states`. Setting `BASE` also
    /// replaces the colour currently shown.
    pub fn set(&mut self, color: Color, states: Interaction) {
        if states.contains(Interaction::BASE) {
            self.base = color;
            self.current = color;
        }
        if states.contains(Interaction::HOVERED) {
            self.hovered = color;
        }
        if states.contains(Interaction::CLICKED) {
            self.clicked = color;
        }
    }

    /// Colour for a single state; `BASE` when the set is empty or mixed.
    pub fn get(&self, state: Interaction) -> Color {
        if state == Interaction::HOVERED {
            self.hovered
        } else if state == Interaction::CLICKED {
            self.clicked
        } else {
            self.base
        }
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn fade_to_base(&mut self, speed: f32, delta_time: f32) {
        self.current = fade_to(self.current, self.hovered, self.base, speed, delta_time);
    }

    pub fn fade_to_hovered(&mut self, speed: f32, delta_time: f32) {
        self.current = fade_to(self.current, self.base, self.hovered, speed, delta_time);
    }

    pub fn snap_to_base(&mut self) {
        self.current = self.base;
    }

    pub fn snap_to_hovered(&mut self) {
        self.current = self.hovered;
    }

    pub fn snap_to_clicked(&mut self) {
        self.current = self.clicked;
    }

    /// Move the shown colour according to the pointer state of this frame.
    pub fn apply(&mut self, state: PointerState, speed: f32, delta_time: f32) {
        match state {
            PointerState::Away => self.fade_to_base(speed, delta_time),
            PointerState::Hovering => self.fade_to_hovered(speed, delta_time),
            PointerState::Released => self.snap_to_hovered(),
            PointerState::Pressed | PointerState::Held => self.snap_to_clicked(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}
