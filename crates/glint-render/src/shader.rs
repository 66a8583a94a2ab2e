//! Shader program sources.
//!
//! Compilation belongs to the GPU backend; this module only holds and
//! validates the GLSL text.

use std::path::Path;

use crate::error::ShaderStage;
use crate::{ResourceError, ResourceResult};

/// GLSL sources of one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
    pub geometry: Option<String>,
}

impl ShaderSource {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
            geometry: None,
        }
    }

    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    /// Read each stage from disk.
    pub fn from_files(vertex: &Path, fragment: &Path, geometry: Option<&Path>) -> ResourceResult<Self> {
        let mut source = Self::new(read_stage(vertex)?, read_stage(fragment)?);
        if let Some(path) = geometry {
            source.geometry = Some(read_stage(path)?);
        }
        Ok(source)
    }

    /// Reject programs with an empty stage.
    pub fn validate(&self, id: &str) -> ResourceResult<()> {
        let stages = [
            (ShaderStage::Vertex, Some(&self.vertex)),
            (ShaderStage::Fragment, Some(&self.fragment)),
            (ShaderStage::Geometry, self.geometry.as_ref()),
        ];
        for (stage, text) in stages {
            if let Some(text) = text
                && text.trim().is_empty()
            {
                return Err(ResourceError::InvalidShader {
                    id: id.to_string(),
                    stage,
                    reason: "source is empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Program used for shapes and textured quads.
    pub fn geometry_program() -> Self {
        Self::new(GEOMETRY_VERTEX, GEOMETRY_FRAGMENT)
    }

    /// Program used for glyph quads sampling a single-channel atlas.
    pub fn text_program() -> Self {
        Self::new(GEOMETRY_VERTEX, TEXT_FRAGMENT)
    }
}

fn read_stage(path: &Path) -> ResourceResult<String> {
    std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub const GEOMETRY_VERTEX: &str = r#"#version 330 core
layout (location = 0) in vec2 a_position;
layout (location = 1) in vec2 a_uv;
out vec2 v_uv;
uniform mat4 u_model;
uniform mat4 u_projection;
void main() {
    gl_Position = u_projection * u_model * vec4(a_position, 0.0, 1.0);
    v_uv = a_uv;
}
"#;

pub const GEOMETRY_FRAGMENT: &str = r#"#version 330 core
in vec2 v_uv;
out vec4 o_color;
uniform vec4 u_color;
uniform sampler2D u_texture;
uniform bool u_use_texture;
uniform bool u_tint;
void main() {
    vec4 color = u_color;
    if (u_use_texture) {
        color = texture(u_texture, v_uv);
        if (u_tint) {
            color *= u_color;
        }
    }
    o_color = color;
}
"#;

pub const TEXT_FRAGMENT: &str = r#"#version 330 core
in vec2 v_uv;
out vec4 o_color;
uniform sampler2D u_atlas;
uniform vec4 u_color;
void main() {
    o_color = vec4(1.0, 1.0, 1.0, texture(u_atlas, v_uv).r) * u_color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_programs_validate() {
        assert!(ShaderSource::geometry_program().validate("geometry").is_ok());
        assert!(ShaderSource::text_program().validate("text").is_ok());
    }

    #[test]
    fn test_empty_geometry_stage_rejected() {
        let source = ShaderSource::geometry_program().with_geometry("  \n");
        let err = source.validate("broken").unwrap_err();
        assert!(matches!(
            err,
            ResourceError::InvalidShader {
                stage: ShaderStage::Geometry,
                ..
            }
        ));
    }
}
