pub mod geometry;
pub mod light;
pub mod transform;

use glam::{Vec2, Vec3};

use crate::core::camera::Camera;
use crate::renderer::texture::WrapMode;
use light::{PointLight, LIGHT_COUNT};
use transform::Transform;

const UV_SCALE_STEP: f32 = 0.1;

/// All mutable state of the scene: camera pose, light rig, object pose, and
/// the texture demo knobs. Owned by the engine and handed by reference to
/// input handling and rendering.
pub struct SceneState {
    pub camera: Camera,
    pub lights: [PointLight; LIGHT_COUNT],
    pub object: Transform,
    pub object_color: Vec3,
    pub uv_scale: Vec2,
    wrap_mode: WrapMode,
}

impl SceneState {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: [
                PointLight {
                    position: Vec3::new(4.5, 1.2, -0.2),
                    color: Vec3::new(1.0, 1.0, 1.0),
                    marker_scale: 0.01,
                },
                PointLight {
                    position: Vec3::new(-1.5, 2.0, 1.0),
                    color: Vec3::new(0.0, 1.0, 0.0),
                    marker_scale: 0.03,
                },
                PointLight {
                    position: Vec3::new(7.5, 1.0, -1.0),
                    color: Vec3::new(1.0, 1.0, 1.0),
                    marker_scale: 0.03,
                },
            ],
            object: Transform::at(Vec3::ZERO)
                .rotated(75f32.to_radians(), Vec3::new(-1.0, 0.0, 0.0)),
            object_color: Vec3::new(1.0, 0.2, 0.0),
            uv_scale: Vec2::splat(5.0),
            wrap_mode: WrapMode::Repeat,
        }
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Records a wrap-mode request. Returns true when the request changed the
    /// active mode; requesting the active mode is a no-op, so holding a mode
    /// key does not re-emit GPU state every frame.
    pub fn request_wrap_mode(&mut self, mode: WrapMode) -> bool {
        if self.wrap_mode == mode {
            return false;
        }
        self.wrap_mode = mode;
        true
    }

    /// Steps both UV-scale axes by one increment (positive or negative).
    pub fn step_uv_scale(&mut self, direction: f32) {
        self.uv_scale += Vec2::splat(UV_SCALE_STEP * direction.signum());
    }
}

#[cfg(test)]
mod tests {
    use super::SceneState;
    use crate::core::camera::Camera;
    use crate::renderer::texture::WrapMode;

    fn scene() -> SceneState {
        SceneState::new(Camera::builder().build())
    }

    #[test]
    fn requesting_the_active_wrap_mode_is_a_noop() {
        let mut scene = scene();
        assert_eq!(scene.wrap_mode(), WrapMode::Repeat);
        assert!(!scene.request_wrap_mode(WrapMode::Repeat));
        assert_eq!(scene.wrap_mode(), WrapMode::Repeat);
    }

    #[test]
    fn requesting_a_different_wrap_mode_updates_exactly_once() {
        let mut scene = scene();
        assert!(scene.request_wrap_mode(WrapMode::ClampToBorder));
        assert_eq!(scene.wrap_mode(), WrapMode::ClampToBorder);
        // holding the key: same request again does nothing
        assert!(!scene.request_wrap_mode(WrapMode::ClampToBorder));
        assert!(scene.request_wrap_mode(WrapMode::MirroredRepeat));
        assert_eq!(scene.wrap_mode(), WrapMode::MirroredRepeat);
    }

    #[test]
    fn uv_scale_steps_cancel_out() {
        let mut scene = scene();
        let original = scene.uv_scale;
        for _ in 0..7 {
            scene.step_uv_scale(1.0);
        }
        for _ in 0..7 {
            scene.step_uv_scale(-1.0);
        }
        assert!((scene.uv_scale - original).length() < 1e-5);
    }

    #[test]
    fn lights_are_independently_positioned_and_colored() {
        let scene = scene();
        let positions: Vec<_> = scene.lights.iter().map(|l| l.position).collect();
        assert_ne!(positions[0], positions[1]);
        assert_ne!(positions[1], positions[2]);
        assert_ne!(positions[0], positions[2]);
        // the middle light is the green one
        assert_eq!(scene.lights[1].color, glam::Vec3::new(0.0, 1.0, 0.0));
    }
}
