//! Unit tests for widget behaviour driven through a frame.

use std::cell::Cell;
use std::rc::Rc;

use glint_core::math::IVec2;
use glint_input::{InputState, KeyCode};
use glint_render::{Color, DrawList, Shape};
use glint_test_utils::{FRAME_TIME, pointer_at, press_at, release, test_font, test_texture};
use glint_ui::{
    Checkbox, Focusable, Frame, IconButton, Image, Interaction, Label, MASK_CHAR, PushButton, RadioGroup,
    RadioOption, TextBox,
};

fn step(frame: &mut Frame, input: &mut InputState) {
    frame.update_with_delta(input, FRAME_TIME);
}

#[test]
fn test_push_button_clicks_once_per_press() {
    let clicks = Rc::new(Cell::new(0));
    let mut button = PushButton::new("OK", test_font(), 32);
    button.set_position(IVec2::new(200, 200));
    let counter = clicks.clone();
    button.set_click_callback(move || counter.set(counter.get() + 1));

    let mut frame = Frame::new();
    frame.add_component("ok", button);

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 200.0, 200.0);
    step(&mut frame, &mut input);
    assert!(frame.get::<PushButton>("ok").unwrap().was_clicked());
    step(&mut frame, &mut input);
    assert!(!frame.get::<PushButton>("ok").unwrap().was_clicked());
    assert_eq!(clicks.get(), 1);

    release(&mut input);
    step(&mut frame, &mut input);
    press_at(&mut input, 200.0, 200.0);
    step(&mut frame, &mut input);
    assert_eq!(clicks.get(), 2);
}

#[test]
fn test_push_button_ignores_press_outside() {
    let mut button = PushButton::new("OK", test_font(), 32);
    button.set_position(IVec2::new(200, 200));
    let mut frame = Frame::new();
    frame.add_component("ok", button);

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 10.0, 10.0);
    step(&mut frame, &mut input);

    let button = frame.get::<PushButton>("ok").unwrap();
    assert!(!button.was_clicked());
    assert!(!button.button().is_held());
}

#[test]
fn test_push_button_size_wraps_caption() {
    let button = PushButton::new("OK", test_font(), 32);
    assert_eq!(button.size(), IVec2::new(32 + 50, 32 + 50));
    assert_eq!(button.text(), "OK");
}

#[test]
fn test_push_button_snaps_to_clicked_color() {
    let mut button = PushButton::new("OK", test_font(), 32);
    button.set_position(IVec2::new(200, 200));
    button.set_color(Color::RED, Interaction::CLICKED);
    let mut frame = Frame::new();
    frame.add_component("ok", button);

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 200.0, 200.0);
    step(&mut frame, &mut input);

    let button = frame.get::<PushButton>("ok").unwrap();
    assert_eq!(button.button().current_color(), Color::RED);
}

#[test]
fn test_icon_button_scales_to_default_height() {
    let icon = IconButton::new(test_texture(32, 16));
    assert_eq!(icon.size(), IVec2::new(128, 64));
    assert_eq!(icon.current_color(), Color::WHITE);
}

#[test]
fn test_icon_button_renders_tinted_texture() {
    let mut icon = IconButton::new(test_texture(16, 16));
    icon.set_position(IVec2::new(100, 100));
    let mut frame = Frame::new();
    frame.add_component("icon", icon);

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 100.0, 100.0);
    step(&mut frame, &mut input);
    assert!(frame.get::<IconButton>("icon").unwrap().was_clicked());

    let mut list = DrawList::new();
    frame.render(&mut list);
    assert!(list.commands().iter().any(|c| matches!(
        c,
        glint_render::DrawCommand::Texture { tint: Some(tint), .. } if *tint == IconButton::CLICKED_TINT
    )));
}

#[test]
fn test_image_takes_texture_size() {
    let mut image = Image::new(Some(test_texture(40, 20)));
    assert_eq!(image.size(), IVec2::new(40, 20));
    image.set_texture(None);
    assert_eq!(image.size(), IVec2::ZERO);
}

#[test]
fn test_checkbox_toggles_on_each_press() {
    let mut checkbox = Checkbox::new();
    checkbox.set_position(IVec2::new(50, 50));
    let mut frame = Frame::new();
    frame.add_component("check", checkbox);

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 50.0, 50.0);
    step(&mut frame, &mut input);
    step(&mut frame, &mut input);
    assert!(frame.get::<Checkbox>("check").unwrap().is_checked());

    release(&mut input);
    step(&mut frame, &mut input);
    press_at(&mut input, 50.0, 50.0);
    step(&mut frame, &mut input);
    assert!(!frame.get::<Checkbox>("check").unwrap().is_checked());
}

#[test]
fn test_checked_checkbox_draws_checkmark() {
    let mut checkbox = Checkbox::new();
    checkbox.set_checked_state(true);
    let mut frame = Frame::new();
    frame.add_component("check", checkbox);

    let mut list = DrawList::new();
    frame.render(&mut list);
    assert_eq!(list.count_shapes(Shape::Checkmark), 1);
}

fn radio_group() -> RadioGroup {
    let mut group = RadioGroup::default();
    group.set_position(IVec2::new(100, 100));
    for (text, id) in [("A", 0), ("B", 1), ("C", 2)] {
        let label = Label::new(text, Color::WHITE, Some(test_font()), 32);
        assert!(group.add_option(RadioOption::new(label, id)));
    }
    group
}

#[test]
fn test_radio_group_layout() {
    let group = radio_group();
    let positions: Vec<i32> = group.options().iter().map(|o| o.button.position().x).collect();
    // button radius 15, label gap 10, label width 16, spacing 30
    assert_eq!(positions, vec![115, 201, 287]);
    assert_eq!(group.options()[0].label.position(), IVec2::new(140, 116));
}

#[test]
fn test_radio_group_rejects_bad_ids() {
    let mut group = radio_group();
    let label = Label::new("D", Color::WHITE, Some(test_font()), 32);
    assert!(!group.add_option(RadioOption::new(label.clone(), 1)));
    assert!(!group.add_option(RadioOption::new(label, -3)));
    assert_eq!(group.len(), 3);
}

#[test]
fn test_radio_group_selection_is_exclusive() {
    let mut frame = Frame::new();
    frame.add_component("group", radio_group());

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 201.0, 100.0);
    step(&mut frame, &mut input);
    release(&mut input);
    step(&mut frame, &mut input);
    press_at(&mut input, 287.0, 100.0);
    step(&mut frame, &mut input);

    let group = frame.get::<RadioGroup>("group").unwrap();
    assert_eq!(group.selected_option(), Some(2));
    let selected: Vec<bool> = group.options().iter().map(|o| o.button.is_selected()).collect();
    assert_eq!(selected, vec![false, false, true]);
}

#[test]
fn test_radio_group_set_and_clear_selection() {
    let mut group = radio_group();
    group.set_selected_option(1);
    assert_eq!(group.selected_option(), Some(1));
    assert!(group.option(1).unwrap().button.is_selected());

    group.set_selected_option(-1);
    assert_eq!(group.selected_option(), None);
    group.set_selected_option(1);
    group.set_selected_option(42);
    assert_eq!(group.selected_option(), None);
}

#[test]
fn test_radio_group_remove_relayouts() {
    let mut group = radio_group();
    group.set_selected_option(0);
    assert!(group.remove_option(0));
    assert!(!group.remove_option(0));

    assert_eq!(group.selected_option(), None);
    assert_eq!(group.options()[0].button.position().x, 115);
    assert_eq!(group.options()[1].button.position().x, 201);
}

fn focused_text_box(frame: &mut Frame, input: &mut InputState) {
    let mut text_box = TextBox::new(test_font(), 32, "password", false);
    text_box.set_position(IVec2::new(300, 300));
    frame.add_component("field", text_box);

    press_at(input, 300.0, 300.0);
    step(frame, input);
    release(input);
    step(frame, input);
    assert!(frame.get::<TextBox>("field").unwrap().is_focused());
}

fn field(frame: &Frame) -> &TextBox {
    frame.get::<TextBox>("field").unwrap()
}

#[test]
fn test_text_box_typing() {
    let mut frame = Frame::new();
    let mut input = pointer_at(0.0, 0.0);
    focused_text_box(&mut frame, &mut input);

    for ch in "hi!".chars() {
        input.push_char(ch);
        step(&mut frame, &mut input);
    }
    assert_eq!(field(&frame).input_text(), "hi!");
}

#[test]
fn test_text_box_ignores_char_on_focus_frame() {
    let mut frame = Frame::new();
    let mut text_box = TextBox::new(test_font(), 32, "name", false);
    text_box.set_position(IVec2::new(300, 300));
    frame.add_component("field", text_box);

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 300.0, 300.0);
    step(&mut frame, &mut input);
    input.push_char('x');
    step(&mut frame, &mut input);

    assert_eq!(frame.get::<TextBox>("field").unwrap().input_text(), "");
}

#[test]
fn test_text_box_ignores_typing_when_unfocused() {
    let mut frame = Frame::new();
    let mut text_box = TextBox::new(test_font(), 32, "name", false);
    text_box.set_position(IVec2::new(300, 300));
    frame.add_component("field", text_box);

    let mut input = pointer_at(0.0, 0.0);
    input.push_char('x');
    step(&mut frame, &mut input);

    assert_eq!(field(&frame).input_text(), "");
}

#[test]
fn test_text_box_backspace_is_rate_limited() {
    let mut frame = Frame::new();
    let mut input = pointer_at(0.0, 0.0);
    focused_text_box(&mut frame, &mut input);
    frame.get_mut::<TextBox>("field").unwrap().set_input_text("abc");

    input.press_key(KeyCode::Backspace);
    step(&mut frame, &mut input);
    assert_eq!(field(&frame).input_text(), "ab");

    step(&mut frame, &mut input);
    step(&mut frame, &mut input);
    assert_eq!(field(&frame).input_text(), "ab");

    frame.update_with_delta(&mut input, 0.25);
    assert_eq!(field(&frame).input_text(), "a");
}

#[test]
fn test_text_box_masks_hidden_input() {
    let mut text_box = TextBox::new(test_font(), 32, "password", false);
    text_box.set_input_visibility(false);
    text_box.set_input_text("abc");

    assert_eq!(text_box.input_text(), "abc");
    assert_eq!(text_box.displayed_text(), "###");
    assert!(text_box.displayed_text().chars().all(|c| c == MASK_CHAR));

    text_box.set_input_visibility(true);
    assert_eq!(text_box.displayed_text(), "abc");
}

#[test]
fn test_text_box_typing_into_hidden_field() {
    let mut frame = Frame::new();
    let mut input = pointer_at(0.0, 0.0);
    focused_text_box(&mut frame, &mut input);
    frame.get_mut::<TextBox>("field").unwrap().set_input_visibility(false);

    for ch in "ab".chars() {
        input.push_char(ch);
        step(&mut frame, &mut input);
    }
    assert_eq!(field(&frame).input_text(), "ab");
    assert_eq!(field(&frame).displayed_text(), "##");
}

#[test]
fn test_text_box_shows_hint_only_when_empty_and_unfocused() {
    let mut frame = Frame::new();
    let mut input = pointer_at(0.0, 0.0);
    let mut text_box = TextBox::new(test_font(), 32, "name", false);
    text_box.set_position(IVec2::new(300, 300));
    frame.add_component("field", text_box);

    let mut list = DrawList::new();
    frame.render(&mut list);
    assert_eq!(list.texts(), vec!["name"]);

    press_at(&mut input, 300.0, 300.0);
    step(&mut frame, &mut input);
    list.clear();
    frame.render(&mut list);
    assert!(list.texts().is_empty());

    frame.get_mut::<TextBox>("field").unwrap().set_input_text("bob");
    list.clear();
    frame.render(&mut list);
    assert_eq!(list.texts(), vec!["bob"]);
}

#[test]
fn test_text_box_unfocuses_on_outside_press() {
    let mut frame = Frame::new();
    let mut input = pointer_at(0.0, 0.0);
    focused_text_box(&mut frame, &mut input);

    press_at(&mut input, 5.0, 5.0);
    step(&mut frame, &mut input);

    assert!(!field(&frame).is_focused());
    assert_eq!(frame.focused_key(), None);
}

#[test]
fn test_text_box_blocked_input_still_focuses() {
    let mut frame = Frame::new();
    let mut input = pointer_at(0.0, 0.0);
    focused_text_box(&mut frame, &mut input);
    frame.get_mut::<TextBox>("field").unwrap().set_input_state(false);

    input.push_char('x');
    step(&mut frame, &mut input);

    assert!(field(&frame).is_focused());
    assert_eq!(field(&frame).input_text(), "");
}
