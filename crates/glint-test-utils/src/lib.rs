//! Test utilities for Glint.
//!
//! Fixtures for fonts and textures that need no files on disk, plus helpers
//! for scripting pointer input frame by frame. Pair them with
//! [`glint_render::DrawList`] to assert on what a frame painted.
//!
//! ```rust
//! use glint_test_utils::{FRAME_TIME, pointer_at, test_font};
//!
//! let font = test_font();
//! assert_eq!(font.measure("ab", 32).x, 32);
//!
//! let input = pointer_at(10.0, 20.0);
//! assert!(FRAME_TIME > 0.0);
//! # let _ = input;
//! ```

pub mod fixtures;
pub mod input;

pub use fixtures::{FRAME_TIME, test_font, test_texture};
pub use input::{pointer_at, press_at, release, scroll};
