//! Rendering contracts and resources for Glint.
//!
//! Widgets describe what to paint through [`RenderBackend`]; a GPU backend
//! (or the recording [`DrawList`]) decides how. Shared assets live in a
//! [`ResourceLoader`] and are handed out as `Arc` handles.

mod backend;
mod color;
mod draw_list;
mod error;
mod font;
mod resources;
mod shader;
mod shape;
mod texture;
mod viewport;

pub use backend::{RenderBackend, StencilMode, TextRun};
pub use color::Color;
pub use draw_list::{DrawCommand, DrawList};
pub use error::{ResourceError, ResourceResult, ShaderStage};
pub use font::{Font, GlyphMetrics};
pub use resources::{GEOMETRY_SHADER, ResourceLoader, TEXT_SHADER};
pub use shader::ShaderSource;
pub use shape::{CIRCLE_ANGLE_STEP, Shape, Topology};
pub use texture::Texture;
pub use viewport::Viewport;
