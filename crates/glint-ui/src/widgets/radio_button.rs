use glint_core::math::{IVec2, Vec2, model_matrix};
use glint_render::{Color, Shape};

use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};
use crate::interaction::{ClickTracker, contains_circle};
use crate::palette::{Interaction, Palette};

/// A circular selector. Selection is driven by its owner (usually a
/// [`RadioGroup`](super::RadioGroup)); the button only reports clicks.
#[derive(Debug, Clone)]
pub struct RadioButton {
    position: IVec2,
    diameter: i32,
    fill: Palette,
    border: Palette,
    border_thickness: i32,
    dot_color: Color,
    selected: bool,
    clicked: bool,
    tracker: ClickTracker,
    enabled: bool,
}

impl RadioButton {
    pub const DEFAULT_DIAMETER: i32 = 30;
    /// How much smaller than the button the selection dot is drawn.
    const DOT_INSET: i32 = 15;

    pub fn new() -> Self {
        Self {
            position: IVec2::ZERO,
            diameter: Self::DEFAULT_DIAMETER,
            fill: Palette::new(Color::gray(0.6), Color::gray(0.8), Color::gray(1.0)),
            border: Palette::uniform(Color::BLACK),
            border_thickness: 4,
            dot_color: Color::RED,
            selected: false,
            clicked: false,
            tracker: ClickTracker::new(),
            enabled: true,
        }
    }

    /// Whether the last update saw the click edge.
    pub fn was_clicked(&self) -> bool {
        self.clicked
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    pub fn set_diameter(&mut self, diameter: i32) {
        self.diameter = diameter;
    }

    pub fn set_color(&mut self, color: Color, states: Interaction) {
        self.fill.set(color, states);
    }

    pub fn set_border_color(&mut self, color: Color, states: Interaction) {
        self.border.set(color, states);
    }

    pub fn set_border_thickness(&mut self, thickness: i32) {
        self.border_thickness = thickness;
    }

    pub fn set_dot_color(&mut self, color: Color) {
        self.dot_color = color;
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    pub fn color(&self, state: Interaction) -> Color {
        self.fill.get(state)
    }

    pub fn border_color(&self, state: Interaction) -> Color {
        self.border.get(state)
    }

    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    pub fn dot_color(&self) -> Color {
        self.dot_color
    }
}

impl Default for RadioButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RadioButton {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let hovering = contains_circle(self.position, self.diameter, ctx.cursor());
        let state = self.tracker.step(hovering, ctx.primary_down());
        self.clicked = state.is_click();

        let (speed, dt) = ctx.fade();
        self.fill.apply(state, speed, dt);
        self.border.apply(state, speed, dt);
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        let center = self.position.as_vec2();
        let outer = Vec2::splat((self.diameter + self.border_thickness) as f32);
        ctx.backend
            .draw_shape(Shape::Circle, model_matrix(center, outer), self.border.current());
        ctx.backend.draw_shape(
            Shape::Circle,
            model_matrix(center, Vec2::splat(self.diameter as f32)),
            self.fill.current(),
        );

        if self.selected {
            let dot = Vec2::splat((self.diameter - Self::DOT_INSET) as f32);
            ctx.backend
                .draw_shape(Shape::Circle, model_matrix(center, dot), self.dot_color);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
