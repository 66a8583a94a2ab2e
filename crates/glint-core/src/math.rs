//! Math types, re-exported from `glam`.

pub use glam::{IVec2, Mat4, Vec2, Vec3, Vec4};

/// Model matrix for a unit-space shape centred on `position` and scaled to `size`.
#[inline]
pub fn model_matrix(position: Vec2, size: Vec2) -> Mat4 {
    Mat4::from_translation(position.extend(0.0)) * Mat4::from_scale(size.extend(1.0))
}

/// Like [`model_matrix`], with a rotation (in degrees) about the shape centre.
#[inline]
pub fn model_matrix_rotated(position: Vec2, size: Vec2, degrees: f32) -> Mat4 {
    model_matrix(position, size) * Mat4::from_rotation_z(degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_matrix_maps_unit_quad_corners() {
        let m = model_matrix(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        let corner = m.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(corner, Vec3::new(110.0, 55.0, 0.0));
    }

    #[test]
    fn test_rotated_half_turn_flips_point() {
        let m = model_matrix_rotated(Vec2::ZERO, Vec2::ONE, 180.0);
        let p = m.transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert!((p.y + 0.5).abs() < 1e-5);
        assert!(p.x.abs() < 1e-5);
    }
}
