use glam::Vec3;

/// Number of point lights in the scene; matches `LIGHT_COUNT` in the object
/// fragment shader.
pub const LIGHT_COUNT: usize = 3;

/// A point light plus the scale of its flat-colored marker prop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    /// Uniform scale of the marker drawn at the light's position.
    pub marker_scale: f32,
}
