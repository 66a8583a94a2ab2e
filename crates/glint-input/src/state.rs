use glint_core::alloc::HashSet;
use glint_core::math::{IVec2, Vec2};

use crate::{InputProvider, KeyCode, MouseButton};

/// Input snapshot accumulated from window events.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    cursor: Vec2,
    buttons: HashSet<MouseButton>,
    keys: HashSet<KeyCode>,
    scroll: Vec2,
    typed: Option<char>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cursor_position(&mut self, position: Vec2) {
        self.cursor = position;
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.remove(&button);
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    /// Add to the pending scroll. Positive y scrolls up.
    pub fn add_scroll(&mut self, delta: Vec2) {
        self.scroll += delta;
    }

    /// Record a typed character, replacing any unread one.
    pub fn push_char(&mut self, ch: char) {
        self.typed = Some(ch);
    }

    /// Release every button and key and drop pending scroll and text.
    pub fn clear(&mut self) {
        self.buttons.clear();
        self.keys.clear();
        self.scroll = Vec2::ZERO;
        self.typed = None;
    }

    /// Map the cursor from window pixels into a viewport's coordinate space.
    ///
    /// `viewport_position` and `viewport_size` describe the viewport in window
    /// pixels measured from the bottom-left corner; the result is y-down.
    pub fn cursor_position_in(&self, viewport_position: IVec2, viewport_size: IVec2, window_size: IVec2) -> Vec2 {
        let local_x = self.cursor.x - viewport_position.x as f32;
        let top = window_size.y - viewport_position.y - viewport_size.y;
        let local_y = self.cursor.y - top as f32;
        Vec2::new(local_x, local_y)
    }
}

impl InputProvider for InputState {
    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    fn take_scroll_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.scroll)
    }

    fn take_typed_char(&mut self) -> Option<char> {
        self.typed.take()
    }
}
