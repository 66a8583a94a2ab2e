//! Cache of shaders, textures and fonts keyed by string id.
//!
//! Loading an id that is already present is a no-op that returns the cached
//! handle. Lookups of absent ids return `None`.

use std::path::Path;
use std::sync::Arc;

use glint_core::alloc::HashMap;

use crate::{Font, ResourceResult, ShaderSource, Texture};

/// Id of the built-in program for shapes and textured quads.
pub const GEOMETRY_SHADER: &str = "geometry";
/// Id of the built-in program for text.
pub const TEXT_SHADER: &str = "text";

#[derive(Debug, Default)]
pub struct ResourceLoader {
    shaders: HashMap<String, Arc<ShaderSource>>,
    textures: HashMap<String, Arc<Texture>>,
    fonts: HashMap<String, Arc<Font>>,
}

impl ResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with the built-in geometry and text programs registered.
    pub fn with_builtin_shaders() -> ResourceResult<Self> {
        let mut loader = Self::new();
        loader.load_shader(GEOMETRY_SHADER, ShaderSource::geometry_program())?;
        loader.load_shader(TEXT_SHADER, ShaderSource::text_program())?;
        Ok(loader)
    }

    pub fn load_shader(&mut self, id: &str, source: ShaderSource) -> ResourceResult<Arc<ShaderSource>> {
        if let Some(existing) = self.shaders.get(id) {
            return Ok(existing.clone());
        }
        source.validate(id)?;
        tracing::debug!(id, "shader program loaded");
        let handle = Arc::new(source);
        self.shaders.insert(id.to_string(), handle.clone());
        Ok(handle)
    }

    /// Read and register a program. Files are not touched if `id` is cached.
    pub fn load_shader_from_files(
        &mut self,
        id: &str,
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
        geometry: Option<&Path>,
    ) -> ResourceResult<Arc<ShaderSource>> {
        if let Some(existing) = self.shaders.get(id) {
            return Ok(existing.clone());
        }
        let source = ShaderSource::from_files(vertex.as_ref(), fragment.as_ref(), geometry)?;
        self.load_shader(id, source)
    }

    /// Decode and register a texture. The file is not touched if `id` is cached.
    pub fn load_texture(&mut self, id: &str, path: impl AsRef<Path>, flip_vertically: bool) -> ResourceResult<Arc<Texture>> {
        if let Some(existing) = self.textures.get(id) {
            return Ok(existing.clone());
        }
        let texture = Texture::load(path.as_ref(), flip_vertically)?;
        tracing::debug!(id, width = texture.width(), height = texture.height(), "texture loaded");
        let handle = Arc::new(texture);
        self.textures.insert(id.to_string(), handle.clone());
        Ok(handle)
    }

    pub fn insert_texture(&mut self, id: &str, texture: Texture) -> Arc<Texture> {
        self.textures
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(texture))
            .clone()
    }

    pub fn load_font(&mut self, id: &str, font: Font) -> Arc<Font> {
        self.fonts
            .entry(id.to_string())
            .or_insert_with(|| {
                tracing::debug!(id, glyphs = font.glyph_count(), "font loaded");
                Arc::new(font)
            })
            .clone()
    }

    pub fn shader(&self, id: &str) -> Option<Arc<ShaderSource>> {
        self.shaders.get(id).cloned()
    }

    pub fn texture(&self, id: &str) -> Option<Arc<Texture>> {
        self.textures.get(id).cloned()
    }

    pub fn font(&self, id: &str) -> Option<Arc<Font>> {
        self.fonts.get(id).cloned()
    }

    /// Drop every cached resource. Outstanding handles stay valid.
    pub fn clear(&mut self) {
        self.shaders.clear();
        self.textures.clear();
        self.fonts.clear();
    }
}
