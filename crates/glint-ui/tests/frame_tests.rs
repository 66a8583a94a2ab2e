//! Unit tests for frame ownership, ordering and focus arbitration.

use std::cell::RefCell;
use std::rc::Rc;

use glint_core::math::{IVec2, Vec2};
use glint_render::{Color, DrawCommand, DrawList, Viewport};
use glint_test_utils::{FRAME_TIME, pointer_at, press_at, release, test_font};
use glint_ui::{Component, Focusable, Frame, Label, RenderContext, TextBox, UpdateContext};

/// Records the order in which it is updated.
struct Probe {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
    enabled: bool,
}

impl Probe {
    fn new(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            name,
            log: log.clone(),
            enabled: true,
        }
    }
}

impl Component for Probe {
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {
        self.log.borrow_mut().push(self.name);
    }

    fn render(&self, _ctx: &mut RenderContext<'_>) {}

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

fn label(text: &str) -> Label {
    Label::new(text, Color::WHITE, Some(test_font()), 32)
}

fn text_box_at(x: i32, y: i32) -> TextBox {
    let mut text_box = TextBox::new(test_font(), 32, "name", false);
    text_box.set_position(IVec2::new(x, y));
    text_box
}

#[test]
fn test_duplicate_key_is_rejected() {
    let mut frame = Frame::new();
    assert!(frame.add_component("title", label("first")));
    assert!(!frame.add_component("title", label("second")));

    assert_eq!(frame.len(), 1);
    assert_eq!(frame.get::<Label>("title").unwrap().text(), "first");
}

#[test]
fn test_remove_and_readd_moves_to_end() {
    let mut frame = Frame::new();
    frame.add_component("a", label("a"));
    frame.add_component("b", label("b"));
    frame.add_component("c", label("c"));

    assert!(frame.remove_component("a").is_some());
    assert!(frame.remove_component("a").is_none());
    frame.add_component("a", label("a"));

    assert_eq!(frame.keys().collect::<Vec<_>>(), vec!["b", "c", "a"]);
}

#[test]
fn test_update_follows_insertion_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame = Frame::new();
    frame.add_component("z", Probe::new("z", &log));
    frame.add_component("a", Probe::new("a", &log));
    frame.add_component("m", Probe::new("m", &log));

    let mut input = pointer_at(0.0, 0.0);
    frame.update_with_delta(&mut input, FRAME_TIME);

    assert_eq!(*log.borrow(), vec!["z", "a", "m"]);
}

#[test]
fn test_disabled_components_are_skipped() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame = Frame::new();
    frame.add_component("on", Probe::new("on", &log));
    frame.add_component("off", Probe::new("off", &log));
    frame.component_mut("off").unwrap().set_enabled(false);

    let mut input = pointer_at(0.0, 0.0);
    frame.update_with_delta(&mut input, FRAME_TIME);

    assert_eq!(*log.borrow(), vec!["on"]);
}

#[test]
fn test_disabled_frame_does_nothing() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame = Frame::new();
    frame.add_component("probe", Probe::new("probe", &log));
    frame.set_enabled(false);

    let mut input = pointer_at(0.0, 0.0);
    frame.update_with_delta(&mut input, FRAME_TIME);
    let mut list = DrawList::new();
    frame.render(&mut list);

    assert!(log.borrow().is_empty());
    assert!(list.is_empty());
}

#[test]
fn test_render_clears_then_paints_in_order() {
    let mut frame = Frame::with_viewport(Viewport::new(IVec2::ZERO, IVec2::new(800, 600)));
    frame.set_background_color(Color::gray(0.5));
    frame.add_component("back", label("back"));
    frame.add_component("front", label("front"));

    let mut list = DrawList::new();
    frame.render(&mut list);

    assert_eq!(
        list.commands()[0],
        DrawCommand::Viewport {
            size: IVec2::new(800, 600)
        }
    );
    assert_eq!(list.commands()[1], DrawCommand::Clear(Color::gray(0.5)));
    assert_eq!(list.texts(), vec!["back", "front"]);
}

#[test]
fn test_typed_lookup_rejects_wrong_type() {
    let mut frame = Frame::new();
    frame.add_component("title", label("hello"));

    assert!(frame.get::<TextBox>("title").is_none());
    assert!(frame.get::<Label>("missing").is_none());
    frame.get_mut::<Label>("title").unwrap().set_text("bye");
    assert_eq!(frame.get::<Label>("title").unwrap().text(), "bye");
}

#[test]
fn test_click_focuses_in_the_same_update() {
    let mut frame = Frame::new();
    frame.add_component("name", text_box_at(300, 100));

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 300.0, 100.0);
    frame.update_with_delta(&mut input, FRAME_TIME);

    assert_eq!(frame.focused_key(), Some("name"));
}

#[test]
fn test_focus_moves_between_text_boxes() {
    let mut frame = Frame::new();
    frame.add_component("first", text_box_at(300, 100));
    frame.add_component("second", text_box_at(300, 300));

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 300.0, 100.0);
    frame.update_with_delta(&mut input, FRAME_TIME);
    release(&mut input);
    frame.update_with_delta(&mut input, FRAME_TIME);
    assert_eq!(frame.focused_key(), Some("first"));

    press_at(&mut input, 300.0, 300.0);
    frame.update_with_delta(&mut input, FRAME_TIME);

    assert_eq!(frame.focused_key(), Some("second"));
    assert!(!frame.get::<TextBox>("first").unwrap().is_focused());
}

#[test]
fn test_first_requester_wins() {
    let mut frame = Frame::new();
    frame.add_component("lower", text_box_at(300, 300));
    frame.add_component("upper", text_box_at(300, 300));

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 300.0, 300.0);
    frame.update_with_delta(&mut input, FRAME_TIME);

    assert!(frame.get::<TextBox>("lower").unwrap().is_focused());
    assert!(!frame.get::<TextBox>("upper").unwrap().is_focused());
    assert!(!frame.get::<TextBox>("upper").unwrap().has_requested_focus());

    // Holding the button over both boxes must not hand focus over.
    frame.update_with_delta(&mut input, FRAME_TIME);
    frame.update_with_delta(&mut input, FRAME_TIME);
    assert_eq!(frame.focused_key(), Some("lower"));

    release(&mut input);
    input.set_cursor_position(Vec2::new(0.0, 0.0));
    frame.update_with_delta(&mut input, FRAME_TIME);
    assert_eq!(frame.focused_key(), Some("lower"));
}

#[test]
fn test_forced_focus_drops_pending_requests() {
    let mut frame = Frame::new();
    frame.add_component("first", text_box_at(300, 100));
    frame.add_component("second", text_box_at(300, 300));
    frame.get_mut::<TextBox>("second").unwrap().focus_state_mut().request();

    assert!(frame.force_set_current_focused("first"));
    assert!(!frame.get::<TextBox>("second").unwrap().has_requested_focus());

    let mut input = pointer_at(0.0, 0.0);
    frame.update_with_delta(&mut input, FRAME_TIME);
    assert_eq!(frame.focused_key(), Some("first"));
}

#[test]
fn test_force_set_current_focused() {
    let mut frame = Frame::new();
    frame.add_component("first", text_box_at(300, 100));
    frame.add_component("second", text_box_at(300, 300));
    frame.add_component("title", label("title"));

    assert!(frame.force_set_current_focused("first"));
    assert_eq!(frame.focused_key(), Some("first"));

    assert!(frame.force_set_current_focused("second"));
    assert_eq!(frame.focused_key(), Some("second"));

    assert!(!frame.force_set_current_focused("title"));
    assert!(!frame.force_set_current_focused("missing"));
    assert_eq!(frame.focused_key(), Some("second"));
}

#[test]
fn test_disabled_focusable_does_not_take_focus() {
    let mut frame = Frame::new();
    frame.add_component("name", text_box_at(300, 100));
    frame.component_mut("name").unwrap().set_enabled(false);

    let mut input = pointer_at(0.0, 0.0);
    press_at(&mut input, 300.0, 100.0);
    frame.update_with_delta(&mut input, FRAME_TIME);

    assert_eq!(frame.focused_key(), None);
}
