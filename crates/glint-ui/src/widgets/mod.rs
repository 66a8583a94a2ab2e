//! Built-in components.

mod button;
mod checkbox;
mod drop_down;
mod icon_button;
mod image;
mod label;
mod push_button;
mod radio_button;
mod radio_group;
mod textbox;

pub use button::{ButtonBase, ClickCallback};
pub use checkbox::Checkbox;
pub use drop_down::DropDown;
pub use icon_button::IconButton;
pub use image::Image;
pub use label::Label;
pub use push_button::PushButton;
pub use radio_button::RadioButton;
pub use radio_group::{RadioGroup, RadioOption};
pub use textbox::{MASK_CHAR, TextBox};
