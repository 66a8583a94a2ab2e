//! Retained-mode widgets for Glint.
//!
//! A [`Frame`] owns a set of components keyed by name and drives them once
//! per frame: `update` polls input through an
//! [`InputProvider`](glint_input::InputProvider), arbitrates focus and advances
//! colour fades; `render` paints through a
//! [`RenderBackend`](glint_render::RenderBackend).
//!
//! ```
//! use std::sync::Arc;
//! use glint_input::{InputState, MouseButton};
//! use glint_core::math::{IVec2, Vec2};
//! use glint_render::{DrawList, Font};
//! use glint_ui::{Frame, PushButton};
//!
//! let font = Arc::new(Font::monospace("mono", 32, 48, 16));
//! let mut button = PushButton::new("OK", font, 32);
//! button.set_position(IVec2::new(100, 100));
//!
//! let mut frame = Frame::new();
//! frame.add_component("ok", button);
//!
//! let mut input = InputState::new();
//! input.set_cursor_position(Vec2::new(100.0, 100.0));
//! input.press_button(MouseButton::Left);
//! frame.update_with_delta(&mut input, 1.0 / 60.0);
//! assert!(frame.get::<PushButton>("ok").unwrap().was_clicked());
//!
//! let mut list = DrawList::new();
//! frame.render(&mut list);
//! assert_eq!(list.texts(), vec!["OK"]);
//! ```

pub mod animation;
mod component;
mod config;
mod context;
pub mod focus;
mod frame;
pub mod interaction;
mod palette;
pub mod widgets;

pub use component::Component;
pub use config::UiConfig;
pub use context::{RenderContext, UpdateContext};
pub use focus::{FocusState, Focusable};
pub use frame::Frame;
pub use interaction::{ClickTracker, PointerState};
pub use palette::{Interaction, Palette};
pub use widgets::*;
