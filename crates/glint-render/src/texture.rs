use std::path::Path;

use crate::{ResourceError, ResourceResult};

/// CPU-side RGBA8 image.
///
/// Backends upload it on first use; widgets only need its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    label: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Wrap tightly packed RGBA8 pixels.
    pub fn from_rgba8(label: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> ResourceResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ResourceError::InvalidTexture {
                reason: format!("expected {} bytes for {}x{} RGBA8, got {}", expected, width, height, pixels.len()),
            });
        }
        Ok(Self {
            label: label.into(),
            width,
            height,
            pixels,
        })
    }

    /// Single-colour texture.
    pub fn solid(label: impl Into<String>, width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba.repeat(width as usize * height as usize);
        Self {
            label: label.into(),
            width,
            height,
            pixels,
        }
    }

    /// Decode an image file, optionally flipping it vertically.
    #[cfg(feature = "image")]
    pub fn load(path: impl AsRef<Path>, flip_vertically: bool) -> ResourceResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| ResourceError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let decoded = if flip_vertically { decoded.flipv() } else { decoded };
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            label: path.display().to_string(),
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    #[cfg(not(feature = "image"))]
    pub fn load(path: impl AsRef<Path>, _flip_vertically: bool) -> ResourceResult<Self> {
        Err(ResourceError::Decode {
            path: path.as_ref().to_path_buf(),
            message: "image decoding requires the `image` feature".to_string(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
