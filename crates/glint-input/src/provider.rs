use glint_core::math::Vec2;

use crate::{KeyCode, MouseButton};

/// Per-frame input queries used by widgets during `update`.
///
/// Button and key queries are level-triggered. Scroll and typed characters are
/// consumed by whichever widget reads them first.
pub trait InputProvider {
    /// Cursor position in viewport pixels, y pointing down.
    fn cursor_position(&self) -> Vec2;

    fn is_button_down(&self, button: MouseButton) -> bool;

    fn is_key_down(&self, key: KeyCode) -> bool;

    /// Scroll accumulated since the last call. Resets to zero.
    fn take_scroll_delta(&mut self) -> Vec2;

    /// Most recent unread typed character, if any.
    fn take_typed_char(&mut self) -> Option<char>;

    /// Whether the primary (left) button is held.
    fn is_primary_down(&self) -> bool {
        self.is_button_down(MouseButton::PRIMARY)
    }
}
