use glint_core::math::{IVec2, Vec2, model_matrix};
use glint_render::{Color, Shape};

use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};
use crate::interaction::{ClickTracker, contains_centered};
use crate::palette::{Interaction, Palette};

/// A square toggle with a checkmark.
#[derive(Debug, Clone)]
pub struct Checkbox {
    position: IVec2,
    scale: i32,
    fill: Palette,
    border: Palette,
    border_thickness: i32,
    checkmark_color: Color,
    checked: bool,
    clicked: bool,
    tracker: ClickTracker,
    enabled: bool,
}

impl Checkbox {
    pub const DEFAULT_SCALE: i32 = 30;
    /// How much smaller than the box the checkmark is drawn.
    const CHECKMARK_INSET: i32 = 7;

    pub fn new() -> Self {
        Self {
            position: IVec2::ZERO,
            scale: Self::DEFAULT_SCALE,
            fill: Palette::new(Color::gray(0.6), Color::gray(0.8), Color::gray(1.0)),
            border: Palette::uniform(Color::BLACK),
            border_thickness: 4,
            checkmark_color: Color::RED,
            checked: false,
            clicked: false,
            tracker: ClickTracker::new(),
            enabled: true,
        }
    }

    pub fn set_checked_state(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether the last update toggled the box.
    pub fn was_clicked(&self) -> bool {
        self.clicked
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    /// Edge length of the box, in pixels.
    pub fn set_scale(&mut self, scale: i32) {
        self.scale = scale;
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

    pub fn set_checkmark_color(&mut self, color: Color) {
        self.checkmark_color = color;
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn scale(&self) -> i32 {
        self.scale
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

    pub fn checkmark_color(&self) -> Color {
        self.checkmark_color
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Checkbox {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let hovering = contains_centered(self.position, IVec2::splat(self.scale), ctx.cursor());
        let state = self.tracker.step(hovering, ctx.primary_down());

        self.clicked = state.is_click();
        if self.clicked {
            self.checked = !self.checked;
            tracing::trace!(checked = self.checked, "checkbox toggled");
        }

        let (speed, dt) = ctx.fade();
        self.fill.apply(state, speed, dt);
        self.border.apply(state, speed, dt);
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        let center = self.position.as_vec2();
        let outer = Vec2::splat((self.scale + self.border_thickness) as f32);
        ctx.backend
            .draw_shape(Shape::Quad, model_matrix(center, outer), self.border.current());
        ctx.backend.draw_shape(
            Shape::Quad,
            model_matrix(center, Vec2::splat(self.scale as f32)),
            self.fill.current(),
        );

        if self.checked {
            let mark = Vec2::splat((self.scale - Self::CHECKMARK_INSET) as f32);
            ctx.backend
                .draw_shape(Shape::Checkmark, model_matrix(center, mark), self.checkmark_color);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
