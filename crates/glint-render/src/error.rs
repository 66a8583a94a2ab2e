use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading render resources.
#[derive(Debug)]
pub enum ResourceError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The file was read but its contents could not be decoded.
    Decode { path: PathBuf, message: String },
    /// A shader stage is missing or malformed.
    InvalidShader {
        id: String,
        stage: ShaderStage,
        reason: String,
    },
    /// Pixel data does not describe a valid texture.
    InvalidTexture { reason: String },
}

/// Programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Geometry => "geometry",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Io { path, source } => {
                write!(f, "Failed to open '{}': {}", path.display(), source)
            }
            ResourceError::Decode { path, message } => {
                write!(f, "Failed to decode '{}': {}", path.display(), message)
            }
            ResourceError::InvalidShader { id, stage, reason } => {
                write!(f, "Shader program '{}' has an invalid {} stage: {}", id, stage, reason)
            }
            ResourceError::InvalidTexture { reason } => {
                write!(f, "Invalid texture: {}", reason)
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_names_path_and_keeps_source() {
        let err = ResourceError::Io {
            path: PathBuf::from("assets/missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Failed to open 'assets/missing.png': no such file");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_shader_error_display() {
        let err = ResourceError::InvalidShader {
            id: "geometry".into(),
            stage: ShaderStage::Fragment,
            reason: "source is empty".into(),
        };
        assert_eq!(
            err.to_string(),
            "Shader program 'geometry' has an invalid fragment stage: source is empty"
        );
    }
}
