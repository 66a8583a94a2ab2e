//! Keyboard/pointer focus for components that take text or open popups.
//!
//! A focusable component never grants itself focus from a click. It raises a
//! request; the owning [`Frame`](crate::Frame) picks one requester per update
//! (the first in paint order) and clears focus and pending requests on everyone else.

/// Focus flags carried by every focusable component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: bool,
    requested: bool,
    gained: bool,
    lost: bool,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn has_requested_focus(&self) -> bool {
        self.requested
    }

    /// Focus was granted since the last [`FocusState::reset_edges`].
    pub fn gained_focus(&self) -> bool {
        self.gained
    }

    /// Focus was removed since the last [`FocusState::reset_edges`].
    pub fn lost_focus(&self) -> bool {
        self.lost
    }

    pub fn request(&mut self) {
        self.requested = true;
    }

    /// Withdraw a pending request, e.g. after another component won focus.
    pub fn cancel_request(&mut self) {
        self.requested = false;
    }

    /// Set focus, recording the gained or lost edge on a change.
    ///
    /// Granting focus also consumes a pending request.
    pub fn set(&mut self, focused: bool) {
        if self.requested && focused {
            self.requested = false;
        }
        if !self.focused && focused {
            self.gained = true;
        } else if self.focused && !focused {
            self.lost = true;
        }
        self.focused = focused;
    }

    /// Drop focus without recording a lost edge.
    pub fn release_quietly(&mut self) {
        self.focused = false;
    }

    /// Clear the gained/lost edges. Called at the end of a component's update.
    pub fn reset_edges(&mut self) {
        self.gained = false;
        self.lost = false;
    }
}

/// Capability of components that take part in focus arbitration.
pub trait Focusable {
    fn focus_state(&self) -> &FocusState;

    fn focus_state_mut(&mut self) -> &mut FocusState;

    fn is_focused(&self) -> bool {
        self.focus_state().is_focused()
    }

    fn has_requested_focus(&self) -> bool {
        self.focus_state().has_requested_focus()
    }

    fn set_focus_state(&mut self, focused: bool) {
        self.focus_state_mut().set(focused);
    }

    /// Drop any pending request. Composites also clear their children's.
    fn cancel_focus_request(&mut self) {
        self.focus_state_mut().cancel_request();
    }
}
