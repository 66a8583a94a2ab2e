//! Recording render backend.
//!
//! [`DrawList`] stores every call as a [`DrawCommand`], in order. Tests use it
//! to inspect what a frame painted; a GPU backend can replay it.

use std::sync::Arc;

use glint_core::math::{Mat4, Vec2, Vec3};

use crate::{Color, RenderBackend, Shape, StencilMode, TextRun, Texture, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Viewport {
        size: glint_core::math::IVec2,
    },
    Clear(Color),
    Shape {
        shape: Shape,
        transform: Mat4,
        color: Color,
    },
    Texture {
        texture: Arc<Texture>,
        transform: Mat4,
        tint: Option<Color>,
    },
    Text {
        font: String,
        text: String,
        position: Vec2,
        font_size: u32,
        color: Color,
    },
    Stencil(StencilMode),
}

impl DrawCommand {
    /// Centre of a shape or texture draw, in viewport pixels.
    pub fn center(&self) -> Option<Vec2> {
        match self {
            DrawCommand::Shape { transform, .. } | DrawCommand::Texture { transform, .. } => {
                Some(transform.transform_point3(Vec3::ZERO).truncate())
            }
            _ => None,
        }
    }

    /// Extent of a shape or texture draw, in viewport pixels.
    pub fn extent(&self) -> Option<Vec2> {
        match self {
            DrawCommand::Shape { transform, .. } | DrawCommand::Texture { transform, .. } => {
                let x = transform.transform_vector3(Vec3::X).truncate().length();
                let y = transform.transform_vector3(Vec3::Y).truncate().length();
                Some(Vec2::new(x, y))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text strings drawn, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count_shapes(&self, kind: Shape) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Shape { shape, .. } if *shape == kind))
            .count()
    }

    /// The stencil mode in effect after the last command.
    pub fn final_stencil_mode(&self) -> StencilMode {
        self.commands
            .iter()
            .rev()
            .find_map(|cmd| match cmd {
                DrawCommand::Stencil(mode) => Some(*mode),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl RenderBackend for DrawList {
    fn set_viewport(&mut self, viewport: &Viewport) {
        self.commands.push(DrawCommand::Viewport { size: viewport.size() });
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_shape(&mut self, shape: Shape, transform: Mat4, color: Color) {
        self.commands.push(DrawCommand::Shape { shape, transform, color });
    }

    fn draw_texture(&mut self, texture: &Arc<Texture>, transform: Mat4, tint: Option<Color>) {
        self.commands.push(DrawCommand::Texture {
            texture: texture.clone(),
            transform,
            tint,
        });
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        self.commands.push(DrawCommand::Text {
            font: run.font.name().to_string(),
            text: run.text.to_string(),
            position: run.position,
            font_size: run.font_size,
            color: run.color,
        });
    }

    fn set_stencil(&mut self, mode: StencilMode) {
        self.commands.push(DrawCommand::Stencil(mode));
    }
}
