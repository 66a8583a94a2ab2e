use glint_core::math::Vec2;
use glint_input::{InputState, MouseButton};

/// Input with the cursor at `(x, y)` and nothing pressed.
pub fn pointer_at(x: f32, y: f32) -> InputState {
    let mut input = InputState::new();
    input.set_cursor_position(Vec2::new(x, y));
    input
}

/// Move the cursor to `(x, y)` and hold the primary button.
pub fn press_at(input: &mut InputState, x: f32, y: f32) {
    input.set_cursor_position(Vec2::new(x, y));
    input.press_button(MouseButton::PRIMARY);
}

pub fn release(input: &mut InputState) {
    input.release_button(MouseButton::PRIMARY);
}

/// Queue one wheel notch; negative `y` scrolls down.
pub fn scroll(input: &mut InputState, y: f32) {
    input.add_scroll(Vec2::new(0.0, y));
}
