use std::sync::Arc;

use glint_core::math::{Mat4, Vec2};

use crate::{Color, Font, Shape, Texture, Viewport};

/// Stencil behaviour for subsequent draws.
///
/// Widgets clip their text to their fill with the sequence
/// `WriteMask` → draw fill → `TestMask` → draw text → `Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StencilMode {
    /// Draw everywhere, leave the mask untouched
    #[default]
    Disabled,
    /// Draw everywhere and mark the covered pixels
    WriteMask,
    /// Draw only on marked pixels, leave the mask untouched
    TestMask,
}

/// A run of text placed on a baseline.
#[derive(Debug, Clone)]
pub struct TextRun<'a> {
    pub font: &'a Arc<Font>,
    pub text: &'a str,
    /// Left end of the baseline, in viewport pixels
    pub position: Vec2,
    pub font_size: u32,
    pub color: Color,
}

/// Draw primitives a widget tree renders through.
///
/// Transforms map the unit-space shape into viewport pixels; the backend
/// applies the viewport projection.
pub trait RenderBackend {
    fn set_viewport(&mut self, viewport: &Viewport);

    /// Clear colour and stencil.
    fn clear(&mut self, color: Color);

    fn draw_shape(&mut self, shape: Shape, transform: Mat4, color: Color);

    /// Draw a textured quad, optionally multiplied by `tint`.
    fn draw_texture(&mut self, texture: &Arc<Texture>, transform: Mat4, tint: Option<Color>);

    fn draw_text(&mut self, run: &TextRun<'_>);

    fn set_stencil(&mut self, mode: StencilMode);
}
