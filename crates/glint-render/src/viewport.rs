use glint_core::math::{IVec2, Mat4};

/// Rectangular drawing region with a y-down orthographic projection.
///
/// The projection is only recomputed by [`Viewport::update`] after the
/// position or size changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    position: IVec2,
    size: IVec2,
    projection: Mat4,
    changed: bool,
}

impl Viewport {
    pub const DEFAULT_SIZE: IVec2 = IVec2::new(600, 600);

    pub fn new(position: IVec2, size: IVec2) -> Self {
        Self {
            position,
            size,
            projection: ortho(size),
            changed: false,
        }
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
        self.changed = true;
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.size = size;
        self.changed = true;
    }

    /// Apply pending changes. Returns `true` if the projection was rebuilt.
    pub fn update(&mut self) -> bool {
        if !self.changed {
            return false;
        }
        self.projection = ortho(self.size);
        self.changed = false;
        tracing::trace!(size = ?self.size, "viewport projection rebuilt");
        true
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn has_pending_changes(&self) -> bool {
        self.changed
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(IVec2::ZERO, Self::DEFAULT_SIZE)
    }
}

fn ortho(size: IVec2) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, size.x as f32, size.y as f32, 0.0, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::math::Vec3;

    #[test]
    fn test_default_viewport() {
        let vp = Viewport::default();
        assert_eq!(vp.position(), IVec2::ZERO);
        assert_eq!(vp.size(), IVec2::new(600, 600));
    }

    #[test]
    fn test_projection_is_y_down() {
        let vp = Viewport::new(IVec2::ZERO, IVec2::new(200, 100));
        let top_left = vp.projection().project_point3(Vec3::ZERO);
        let bottom_right = vp.projection().project_point3(Vec3::new(200.0, 100.0, 0.0));
        assert!((top_left.x + 1.0).abs() < 1e-6 && (top_left.y - 1.0).abs() < 1e-6);
        assert!((bottom_right.x - 1.0).abs() < 1e-6 && (bottom_right.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_applies_on_update() {
        let mut vp = Viewport::default();
        let before = vp.projection();
        vp.set_size(IVec2::new(300, 300));
        assert_eq!(vp.projection(), before);
        assert!(vp.update());
        assert_ne!(vp.projection(), before);
        assert!(!vp.update());
    }
}
