use glam::{Mat4, Vec3};

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Movement directions relative to the current camera orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-fly camera driven by yaw/pitch angles and a zoom (field of view).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder {
            position: Vec3::ZERO,
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom: 45.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch = (self.pitch + yoffset * self.mouse_sensitivity)
            .min(PITCH_LIMIT)
            .max(-PITCH_LIMIT);
        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).min(ZOOM_MAX).max(ZOOM_MIN);
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

pub struct CameraBuilder {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl CameraBuilder {
    pub fn position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn yaw(&mut self, yaw: f32) -> &mut Self {
        self.yaw = yaw;
        self
    }

    pub fn pitch(&mut self, pitch: f32) -> &mut Self {
        if pitch.abs() > PITCH_LIMIT {
            log::warn!("Pitch out of bounds: -{0} <= `{1}` <= {0}", PITCH_LIMIT, pitch);
        }
        self.pitch = pitch.min(PITCH_LIMIT).max(-PITCH_LIMIT);
        self
    }

    pub fn zoom(&mut self, zoom: f32) -> &mut Self {
        if !(ZOOM_MIN..=ZOOM_MAX).contains(&zoom) {
            log::warn!("Zoom out of bounds: {} <= `{}` <= {}", ZOOM_MIN, zoom, ZOOM_MAX);
        }
        self.zoom = zoom.min(ZOOM_MAX).max(ZOOM_MIN);
        self
    }

    pub fn build(&mut self) -> Camera {
        let mut camera = Camera {
            position: self.position,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: self.yaw,
            pitch: self.pitch,
            movement_speed: self.movement_speed,
            mouse_sensitivity: self.mouse_sensitivity,
            zoom: self.zoom,
        };
        camera.update_vectors();
        camera
    }
}

#[cfg(test)]
mod tests {
    use super::{Camera, CameraMovement};
    use glam::Vec3;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::builder().position(Vec3::new(0.0, 0.0, 7.0)).build();
        let view = camera.view_matrix();
        // a point one unit ahead of the camera lands one unit down the view axis
        assert_vec3_eq(view.transform_point3(Vec3::new(0.0, 0.0, 6.0)), -Vec3::Z);
        // the camera's own position is the view-space origin
        assert_vec3_eq(view.transform_point3(Vec3::new(0.0, 0.0, 7.0)), Vec3::ZERO);
    }

    #[test]
    fn keyboard_movement_scales_with_delta_time() {
        let mut camera = Camera::builder().build();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert_vec3_eq(camera.position(), Vec3::new(0.0, 0.0, -2.5));

        let mut camera = Camera::builder().build();
        camera.process_keyboard(CameraMovement::Right, 0.5);
        assert_vec3_eq(camera.position(), Vec3::new(1.25, 0.0, 0.0));
    }

    #[test]
    fn scroll_clamps_zoom() {
        let mut camera = Camera::builder().build();
        camera.process_mouse_scroll(1000.0);
        assert!((camera.zoom() - 1.0).abs() < EPSILON);
        camera.process_mouse_scroll(-1000.0);
        assert!((camera.zoom() - 45.0).abs() < EPSILON);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::builder().build();
        camera.process_mouse_movement(0.0, 1e6);
        // looking almost straight up still leaves the front vector finite
        let view = camera.view_matrix();
        assert!(view.to_cols_array().iter().all(|v| v.is_finite()));
        camera.process_mouse_movement(0.0, -2e6);
        let view = camera.view_matrix();
        assert!(view.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
