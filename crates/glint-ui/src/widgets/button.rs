use std::fmt;

use glint_core::math::{IVec2, model_matrix};
use glint_render::{Color, Shape, StencilMode};

use crate::context::{RenderContext, UpdateContext};
use crate::interaction::{ClickTracker, PointerState, contains_centered};
use crate::palette::{Interaction, Palette};

pub type ClickCallback = Box<dyn FnMut()>;

/// State shared by every clickable rectangle: geometry, fill and border
/// palettes, the click callback and the per-instance press tracker.
pub struct ButtonBase {
    position: IVec2,
    size: IVec2,
    fill: Palette,
    border: Palette,
    border_thickness: i32,
    on_click: Option<ClickCallback>,
    tracker: ClickTracker,
    clicked: bool,
}

impl ButtonBase {
    pub const DEFAULT_BORDER_THICKNESS: i32 = 4;

    pub fn new(size: IVec2, fill: Palette) -> Self {
        Self {
            position: IVec2::ZERO,
            size,
            fill,
            border: Palette::uniform(Color::BLACK),
            border_thickness: Self::DEFAULT_BORDER_THICKNESS,
            on_click: None,
            tracker: ClickTracker::new(),
            clicked: false,
        }
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.size = size;
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

    /// Invoked once per physical press that starts over the button.
    pub fn set_click_callback(&mut self, callback: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    pub fn clear_click_callback(&mut self) {
        self.on_click = None;
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn color(&self, state: Interaction) -> Color {
        self.fill.get(state)
    }

    pub fn border_color(&self, state: Interaction) -> Color {
        self.border.get(state)
    }

    pub fn current_color(&self) -> Color {
        self.fill.current()
    }

    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    pub fn fill(&self) -> &Palette {
        &self.fill
    }

    /// Whether the last update saw the click edge.
    pub fn was_clicked(&self) -> bool {
        self.clicked
    }

    pub fn is_held(&self) -> bool {
        self.tracker.is_held()
    }

    pub fn is_cursor_hovering(&self, ctx: &UpdateContext<'_>) -> bool {
        contains_centered(self.position, self.size, ctx.cursor())
    }

    /// Run the hover/click machine for this frame, fire the callback on the
    /// click edge and move both palettes.
    pub fn poll(&mut self, ctx: &mut UpdateContext<'_>) -> PointerState {
        let hovering = self.is_cursor_hovering(ctx);
        let state = self.tracker.step(hovering, ctx.primary_down());

        self.clicked = state.is_click();
        if self.clicked {
            tracing::trace!(position = ?self.position, "button clicked");
            if let Some(callback) = self.on_click.as_mut() {
                callback();
            }
        }

        let (speed, dt) = ctx.fade();
        self.apply_palettes(state, speed, dt);
        state
    }

    /// Move the fill and border colours for `state` without touching click state.
    pub fn apply_palettes(&mut self, state: PointerState, speed: f32, delta_time: f32) {
        self.fill.apply(state, speed, delta_time);
        self.border.apply(state, speed, delta_time);
    }

    /// Paint the border and fill, then `content` clipped to the fill.
    pub fn draw_clipped(&self, ctx: &mut RenderContext<'_>, content: impl FnOnce(&mut RenderContext<'_>)) {
        let center = self.position.as_vec2();
        if self.border_thickness > 0 {
            let outer = (self.size + IVec2::splat(self.border_thickness)).as_vec2();
            ctx.backend.draw_shape(Shape::Quad, model_matrix(center, outer), self.border.current());
        }

        ctx.backend.set_stencil(StencilMode::WriteMask);
        ctx.backend
            .draw_shape(Shape::Quad, model_matrix(center, self.size.as_vec2()), self.fill.current());
        ctx.backend.set_stencil(StencilMode::TestMask);
        content(ctx);
        ctx.backend.set_stencil(StencilMode::Disabled);
    }
}

impl fmt::Debug for ButtonBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonBase")
            .field("position", &self.position)
            .field("size", &self.size)
            .field("fill", &self.fill)
            .field("border", &self.border)
            .field("border_thickness", &self.border_thickness)
            .field("has_callback", &self.on_click.is_some())
            .field("tracker", &self.tracker)
            .finish()
    }
}
