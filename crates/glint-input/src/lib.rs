//! Input snapshot for Glint widgets.
//!
//! Widgets read input through the [`InputProvider`] trait. [`InputState`] is the
//! stock implementation: feed it window events (or drive it directly in tests)
//! and pass it to `Frame::update`.

mod keys;
mod provider;
mod state;
#[cfg(feature = "winit")]
mod winit;

pub use keys::{KeyCode, MouseButton};
pub use provider::InputProvider;
pub use state::InputState;
#[cfg(feature = "winit")]
pub use winit::{map_key_code, map_mouse_button, map_scroll_delta};
