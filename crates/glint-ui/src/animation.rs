//! Linear fades for widget colours and other animatable values.
//!
//! A fade moves `current` toward `to` at a rate proportional to the distance
//! between the two end points, so a full transition takes `1 / speed`
//! seconds regardless of where `current` starts. The result never overshoots
//! `to`.
//!
//! ```
//! use glint_ui::animation::fade_to;
//!
//! let mut alpha = 0.0_f32;
//! for _ in 0..4 {
//!     alpha = fade_to(alpha, 0.0, 1.0, 8.0, 1.0 / 16.0);
//! }
//! assert_eq!(alpha, 1.0);
//! ```

use glint_core::math::{Vec2, Vec4};
use glint_render::Color;

/// Values that can be faded component by component.
pub trait Fade: Copy {
    fn fade_to(self, from: Self, to: Self, speed: f32, delta_time: f32) -> Self;
}

impl Fade for f32 {
    fn fade_to(self, from: f32, to: f32, speed: f32, delta_time: f32) -> f32 {
        let span = to - from;
        let next = self + span * speed * delta_time;
        if span >= 0.0 { next.min(to) } else { next.max(to) }
    }
}

impl Fade for Vec2 {
    fn fade_to(self, from: Vec2, to: Vec2, speed: f32, delta_time: f32) -> Vec2 {
        Vec2::new(
            self.x.fade_to(from.x, to.x, speed, delta_time),
            self.y.fade_to(from.y, to.y, speed, delta_time),
        )
    }
}

impl Fade for Vec4 {
    fn fade_to(self, from: Vec4, to: Vec4, speed: f32, delta_time: f32) -> Vec4 {
        let [x, y, z, w] = [0usize, 1, 2, 3].map(|i| self[i].fade_to(from[i], to[i], speed, delta_time));
        Vec4::new(x, y, z, w)
    }
}

impl Fade for Color {
    fn fade_to(self, from: Color, to: Color, speed: f32, delta_time: f32) -> Color {
        self.to_vec4()
            .fade_to(from.to_vec4(), to.to_vec4(), speed, delta_time)
            .into()
    }
}

/// Step `current` one frame along the fade from `from` to `to`.
#[inline]
pub fn fade_to<T: Fade>(current: T, from: T, to: T, speed: f32, delta_time: f32) -> T {
    current.fade_to(from, to, speed, delta_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_up_clamps_at_target() {
        let v = fade_to(0.9, 0.0, 1.0, 8.0, 1.0);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_fade_down_clamps_at_target() {
        let v = fade_to(0.1, 1.0, 0.0, 8.0, 1.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_fade_partial_step() {
        let v = fade_to(0.0_f32, 0.0, 1.0, 8.0, 0.05);
        assert!((v - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_equal_endpoints_snap_to_target() {
        assert_eq!(fade_to(0.7, 0.5, 0.5, 8.0, 0.01), 0.5);
    }

    #[test]
    fn test_color_fades_per_channel() {
        let from = Color::rgb(0.0, 1.0, 0.5);
        let to = Color::rgb(1.0, 0.0, 0.5);
        let mid = fade_to(from, from, to, 8.0, 1.0 / 16.0);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert_eq!(mid.b, 0.5);
        assert_eq!(mid.a, 1.0);

        let done = fade_to(mid, from, to, 8.0, 1.0);
        assert_eq!(done, to);
    }

    #[test]
    fn test_vec2_fade() {
        let v = fade_to(Vec2::ZERO, Vec2::ZERO, Vec2::new(10.0, -10.0), 1.0, 0.5);
        assert_eq!(v, Vec2::new(5.0, -5.0));
    }
}
