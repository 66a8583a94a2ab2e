use glint_core::math::Vec2;
use glint_input::InputProvider;
use glint_render::{RenderBackend, Viewport};

use crate::UiConfig;

/// Services available to a component during `update`.
pub struct UpdateContext<'a> {
    pub input: &'a mut dyn InputProvider,
    /// Seconds since the previous frame update.
    pub delta_time: f32,
    pub config: &'a UiConfig,
}

impl<'a> UpdateContext<'a> {
    pub fn new(input: &'a mut dyn InputProvider, delta_time: f32, config: &'a UiConfig) -> Self {
        Self {
            input,
            delta_time,
            config,
        }
    }

    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.input.cursor_position()
    }

    #[inline]
    pub fn primary_down(&self) -> bool {
        self.input.is_primary_down()
    }

    /// Fade speed scaled for this frame, as `(speed, delta_time)`.
    #[inline]
    pub fn fade(&self) -> (f32, f32) {
        (self.config.fade_speed, self.delta_time)
    }
}

/// Services available to a component during `render`.
pub struct RenderContext<'a> {
    pub backend: &'a mut dyn RenderBackend,
    pub viewport: &'a Viewport,
}

impl<'a> RenderContext<'a> {
    pub fn new(backend: &'a mut dyn RenderBackend, viewport: &'a Viewport) -> Self {
        Self { backend, viewport }
    }
}
