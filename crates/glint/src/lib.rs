//! Glint - a small retained-mode GUI component library
//!
//! Glint draws pages of widgets on top of any renderer that implements
//! [`render::RenderBackend`], driven by any input source that implements
//! [`input::InputProvider`]:
//!
//! - **Frames**: keyed, ordered component containers with single-winner focus
//! - **Widgets**: labels, images, push/icon buttons, checkboxes, radio groups,
//!   text boxes and drop-down lists
//! - **Animation**: frame-rate independent colour fades
//! - **Resources**: shader, texture and font caches
//!
//! # Quick Start
//!
//! ```
//! use glint::prelude::*;
//!
//! glint::init(&Config::default());
//!
//! let font = std::sync::Arc::new(Font::monospace("mono", 32, 48, 16));
//! let mut frame = Frame::new();
//! let mut name = TextBox::new(font, 32, "Your name", false);
//! name.set_position(IVec2::new(300, 200));
//! frame.add_component("name", name);
//!
//! let mut input = InputState::new();
//! let mut draw_list = DrawList::new();
//! frame.update(&mut input);
//! frame.render(&mut draw_list);
//! assert_eq!(draw_list.texts(), vec!["Your name"]);
//! ```

pub use glint_core as core;
pub use glint_core::math;
pub use glint_core::{Config, ProfilingMode};
pub use glint_input as input;
pub use glint_render as render;
pub use glint_ui as ui;

use glint_core::profiling::{ProfilingBackend, init_profiling};

/// Install logging and profiling as described by `config`.
///
/// Safe to call more than once; only the first logging setup takes effect.
pub fn init(config: &Config) {
    match &config.log_filter {
        Some(filter) => glint_core::logging::init_with_filter(filter),
        None => glint_core::logging::init(),
    }

    match config.profiling {
        ProfilingMode::Off => {}
        ProfilingMode::On => init_profiling(ProfilingBackend::InProcess),
        ProfilingMode::WithWebServer => init_profiling(ProfilingBackend::PuffinHttp),
    }
    tracing::debug!(profiling = ?config.profiling, "glint initialised");
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Config, ProfilingMode};

    // Core math types
    pub use glint_core::math::{IVec2, Mat4, Vec2, Vec4};

    // Input
    pub use glint_input::{InputProvider, InputState, KeyCode, MouseButton};

    // Rendering and resources
    pub use glint_render::{
        Color, DrawList, Font, RenderBackend, ResourceError, ResourceLoader, Shape, Texture, Viewport,
    };

    // UI
    pub use glint_ui::{
        Checkbox, Component, DropDown, Focusable, Frame, IconButton, Image, Interaction, Label,
        PushButton, RadioGroup, RadioOption, TextBox, UiConfig,
    };
}
