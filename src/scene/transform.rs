use glam::{Mat4, Vec3};

/// Position, axis-angle rotation, and scale of one scene prop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation angle in radians around `rotation_axis`.
    pub rotation_angle: f32,
    pub rotation_axis: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation_angle: 0.0,
            rotation_axis: Vec3::Z,
            scale: Vec3::ONE,
        }
    }

    pub fn rotated(mut self, angle: f32, axis: Vec3) -> Self {
        self.rotation_angle = angle;
        self.rotation_axis = axis;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Model matrix, composed right-to-left: scale, then rotate, then
    /// translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_axis_angle(self.rotation_axis.normalize(), self.rotation_angle)
            * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn composition_applies_scale_then_rotation_then_translation() {
        let transform = Transform::at(Vec3::new(1.0, 2.0, 3.0))
            .rotated(FRAC_PI_2, Vec3::Z)
            .scaled(Vec3::splat(2.0));
        let matrix = transform.matrix();

        // (1, 0, 0): scaled to (2, 0, 0), rotated 90 deg about z to
        // (0, 2, 0), translated to (1, 4, 3)
        assert_vec3_eq(
            matrix.transform_point3(Vec3::new(1.0, 0.0, 0.0)),
            Vec3::new(1.0, 4.0, 3.0),
        );
        // the origin only picks up the translation
        assert_vec3_eq(matrix.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn plain_translation_moves_every_corner_equally() {
        let matrix = Transform::at(Vec3::new(-1.5, 2.0, 1.0)).matrix();
        assert_vec3_eq(
            matrix.transform_point3(Vec3::new(1.0, 1.0, 1.0)),
            Vec3::new(-0.5, 3.0, 2.0),
        );
    }

    #[test]
    fn rotation_about_negative_x_tilts_the_prop_back() {
        // the pad prop's own pose: 75 degrees about (-1, 0, 0)
        let matrix = Transform::at(Vec3::ZERO)
            .rotated(75f32.to_radians(), Vec3::new(-1.0, 0.0, 0.0))
            .matrix();
        let moved = matrix.transform_point3(Vec3::new(0.0, 1.0, 0.0));
        let (sin, cos) = 75f32.to_radians().sin_cos();
        assert_vec3_eq(moved, Vec3::new(0.0, cos, -sin));
    }
}
