//! Tests for translating winit input into Glint input types.

#![cfg(feature = "winit")]

use glint_core::math::Vec2;
use glint_input::{KeyCode, MouseButton, map_key_code, map_mouse_button, map_scroll_delta};
use winit::dpi::PhysicalPosition;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode as WinitKeyCode;

#[test]
fn test_letter_and_editing_keys_map() {
    assert_eq!(map_key_code(WinitKeyCode::KeyA), Some(KeyCode::A));
    assert_eq!(map_key_code(WinitKeyCode::Backspace), Some(KeyCode::Backspace));
    assert_eq!(map_key_code(WinitKeyCode::ShiftRight), Some(KeyCode::RightShift));
}

#[test]
fn test_unmapped_key_is_none() {
    assert_eq!(map_key_code(WinitKeyCode::MediaPlayPause), None);
}

#[test]
fn test_mouse_buttons_map() {
    assert_eq!(map_mouse_button(winit::event::MouseButton::Left), MouseButton::PRIMARY);
    assert_eq!(map_mouse_button(winit::event::MouseButton::Other(7)), MouseButton::Other(7));
}

#[test]
fn test_scroll_delta_keeps_direction() {
    assert_eq!(map_scroll_delta(MouseScrollDelta::LineDelta(0.0, -1.0)), Vec2::new(0.0, -1.0));
    let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(3.0, 12.0));
    assert_eq!(map_scroll_delta(pixels), Vec2::new(3.0, 12.0));
}
