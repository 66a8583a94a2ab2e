/// Timing and spacing constants shared by all widgets in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// Colour fade rate; a full hover transition takes `1 / fade_speed` seconds.
    pub fade_speed: f32,
    /// Minimum seconds between characters deleted by a held Backspace.
    pub backspace_repeat_interval: f32,
    /// Drop-down scroll distance per frame of wheel input, in options.
    pub scroll_step: f32,
    /// Horizontal padding of left-aligned text inside a text box.
    pub text_inset: f32,
    /// Width trimmed from drop-down separators.
    pub option_separator_inset: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fade_speed: 8.0,
            backspace_repeat_interval: 0.2,
            scroll_step: 0.075,
            text_inset: 15.0,
            option_separator_inset: 20.0,
        }
    }
}
