pub mod error;
pub mod mesh;
pub mod shader;
pub mod texture;

use std::path::Path;
use std::rc::Rc;

use glam::Mat4;
use glow::HasContext;

use crate::core::window::Dimensions;
use crate::scene::{geometry, transform::Transform, SceneState};
use error::RendererError;
use mesh::Mesh;
use shader::{indexed_uniform, ShaderProgram};
use texture::{Texture2D, WrapMode};

pub const OBJECT_VERTEX_SHADER: &str = include_str!("../../shaders/object.vert");
pub const OBJECT_FRAGMENT_SHADER: &str = include_str!("../../shaders/object.frag");
pub const LAMP_VERTEX_SHADER: &str = include_str!("../../shaders/lamp.vert");
pub const LAMP_FRAGMENT_SHADER: &str = include_str!("../../shaders/lamp.frag");

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Owns the GL handle and every GPU resource of the scene.
///
/// Field order is drop order: mesh, then textures, then programs, with the
/// shared context handle released last.
pub struct Renderer {
    mesh: Mesh,
    page_texture: Texture2D,
    // uploaded but never sampled; held so both texture handles live for the
    // whole run
    _brick_texture: Texture2D,
    object_program: ShaderProgram,
    lamp_program: ShaderProgram,
    gl: Rc<glow::Context>,
    aspect: f32,
}

impl Renderer {
    /// Acquires all GPU resources up front; any failure aborts startup with
    /// the offending diagnostic, and resources acquired before the failure
    /// release themselves on unwind of this function's locals.
    pub fn init<P: AsRef<Path>>(
        gl: glow::Context,
        dimensions: Dimensions,
        page_texture_path: P,
        brick_texture_path: P,
    ) -> Result<Self, RendererError> {
        let gl = Rc::new(gl);

        log::info!("OpenGL version: {}", unsafe {
            gl.get_parameter_string(glow::VERSION)
        });

        let mesh = Mesh::upload(gl.clone(), geometry::SCENE_VERTICES)?;

        let object_program =
            ShaderProgram::from_sources(gl.clone(), OBJECT_VERTEX_SHADER, OBJECT_FRAGMENT_SHADER)?;
        let lamp_program =
            ShaderProgram::from_sources(gl.clone(), LAMP_VERTEX_SHADER, LAMP_FRAGMENT_SHADER)?;

        let page_texture = Texture2D::from_file(gl.clone(), page_texture_path)?;
        let brick_texture = Texture2D::from_file(gl.clone(), brick_texture_path)?;

        // the sampler binding never changes, set it once
        object_program.bind();
        object_program.set_i32("uTexture", 0);

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
        }

        Ok(Self {
            mesh,
            page_texture,
            _brick_texture: brick_texture,
            object_program,
            lamp_program,
            gl,
            aspect: dimensions.aspect(),
        })
    }

    pub fn resize(&self, width: i32, height: i32) {
        unsafe { self.gl.viewport(0, 0, width, height) };
    }

    /// Applies a wrap mode to the page texture.
    pub fn set_wrap_mode(&self, mode: WrapMode) {
        self.page_texture.set_wrap(mode);
    }

    /// Draws the Phong-lit object pass followed by one flat-colored lamp
    /// marker per light, all from the same vertex buffer.
    pub fn draw_frame(&self, scene: &SceneState) {
        unsafe {
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.mesh.bind();

        let view = scene.camera.view_matrix();
        let projection = Mat4::perspective_rh_gl(
            scene.camera.zoom().to_radians(),
            self.aspect,
            NEAR_PLANE,
            FAR_PLANE,
        );

        self.draw_object_pass(scene, &view, &projection);
        self.draw_lamp_passes(scene, &view, &projection);

        unsafe {
            self.gl.bind_vertex_array(None);
            self.gl.use_program(None);
        }
    }

    fn draw_object_pass(&self, scene: &SceneState, view: &Mat4, projection: &Mat4) {
        let program = &self.object_program;
        program.bind();

        program.set_mat4("model", &scene.object.matrix());
        program.set_mat4("view", view);
        program.set_mat4("projection", projection);

        program.set_vec3("objectColor", scene.object_color);
        program.set_vec3("viewPosition", scene.camera.position());
        program.set_vec2("uvScale", scene.uv_scale);
        for (index, light) in scene.lights.iter().enumerate() {
            program.set_vec3(&indexed_uniform("lightPositions", index), light.position);
            program.set_vec3(&indexed_uniform("lightColors", index), light.color);
        }

        self.page_texture.bind(0);
        self.mesh.draw();
    }

    fn draw_lamp_passes(&self, scene: &SceneState, view: &Mat4, projection: &Mat4) {
        let program = &self.lamp_program;
        program.bind();

        program.set_mat4("view", view);
        program.set_mat4("projection", projection);

        for light in scene.lights.iter() {
            let model = Transform::at(light.position)
                .scaled(glam::Vec3::splat(light.marker_scale))
                .matrix();
            program.set_mat4("model", &model);
            program.set_vec3("lampColor", light.color);
            self.mesh.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LAMP_FRAGMENT_SHADER, LAMP_VERTEX_SHADER, OBJECT_FRAGMENT_SHADER, OBJECT_VERTEX_SHADER,
    };
    use crate::scene::light::LIGHT_COUNT;

    #[test]
    fn each_light_has_distinct_indexed_uniforms() {
        // three independent lights, not one shared scalar uniform
        assert!(OBJECT_FRAGMENT_SHADER.contains("uniform vec3 lightPositions[LIGHT_COUNT]"));
        assert!(OBJECT_FRAGMENT_SHADER.contains("uniform vec3 lightColors[LIGHT_COUNT]"));
        assert!(OBJECT_FRAGMENT_SHADER.contains(&format!("const int LIGHT_COUNT = {};", LIGHT_COUNT)));
        assert!(!OBJECT_FRAGMENT_SHADER.contains("uniform vec3 lightPos;"));
        assert!(!OBJECT_FRAGMENT_SHADER.contains("uniform vec3 lightColor;"));
    }

    #[test]
    fn fragment_stage_accumulates_light_contributions() {
        assert!(OBJECT_FRAGMENT_SHADER.contains("for (int i = 0; i < LIGHT_COUNT; ++i)"));
        assert!(OBJECT_FRAGMENT_SHADER.contains("lighting += ambient + diffuse + specular;"));
    }

    #[test]
    fn lamp_color_comes_from_a_uniform() {
        assert!(LAMP_FRAGMENT_SHADER.contains("uniform vec3 lampColor;"));
    }

    #[test]
    fn vertex_stages_consume_the_shared_transform_uniforms() {
        for source in &[OBJECT_VERTEX_SHADER, LAMP_VERTEX_SHADER] {
            assert!(source.contains("uniform mat4 model;"));
            assert!(source.contains("uniform mat4 view;"));
            assert!(source.contains("uniform mat4 projection;"));
        }
    }
}
