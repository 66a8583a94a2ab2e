use std::any::Any;

use crate::context::{RenderContext, UpdateContext};
use crate::focus::Focusable;

/// A widget owned by a [`Frame`](crate::Frame).
///
/// `update` polls input and advances animation; `render` only draws and never
/// mutates state. A disabled component is neither updated nor rendered by its
/// frame.
pub trait Component: Any {
    fn update(&mut self, ctx: &mut UpdateContext<'_>);

    fn render(&self, ctx: &mut RenderContext<'_>);

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// The focus capability, for components that take focus.
    fn as_focusable(&self) -> Option<&dyn Focusable> {
        None
    }

    fn as_focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

impl dyn Component {
    /// Borrow as the concrete widget type, if it is one.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }

    pub fn is_focusable(&self) -> bool {
        self.as_focusable().is_some()
    }
}
