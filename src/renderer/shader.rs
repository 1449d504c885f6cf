use std::rc::Rc;

use glam::{Mat4, Vec2, Vec3};
use glow::HasContext;

use super::error::{RendererError, ShaderStage};

/// A linked vertex+fragment program.
///
/// Uniforms are set by name; locations the driver optimized away resolve to
/// `None` and the corresponding set becomes a no-op.
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    program: glow::NativeProgram,
}

impl ShaderProgram {
    /// Compiles both stages and links them, surfacing the driver's info log
    /// on any failure. A program that fails to link is deleted before the
    /// error returns, so no partially-linked handle remains.
    pub fn from_sources(
        gl: Rc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, RendererError> {
        let vertex = compile_stage(&gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_stage(&gl, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        let program = match unsafe { gl.create_program() } {
            Ok(program) => program,
            Err(msg) => {
                unsafe {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                }
                return Err(RendererError::Allocation(msg));
            }
        };

        unsafe {
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
        }
        let linked = unsafe { gl.get_program_link_status(program) };
        let log = unsafe { gl.get_program_info_log(program) };
        unsafe {
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
        }

        if !linked {
            unsafe { gl.delete_program(program) };
            return Err(RendererError::ShaderLink { log });
        }

        Ok(Self { gl, program })
    }

    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }

    fn location(&self, name: &str) -> Option<glow::NativeUniformLocation> {
        unsafe { self.gl.get_uniform_location(self.program, name) }
    }

    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(
                self.location(name).as_ref(),
                false,
                &value.to_cols_array(),
            )
        };
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        unsafe {
            self.gl
                .uniform_3_f32(self.location(name).as_ref(), value.x, value.y, value.z)
        };
    }

    pub fn set_vec2(&self, name: &str, value: Vec2) {
        unsafe {
            self.gl
                .uniform_2_f32(self.location(name).as_ref(), value.x, value.y)
        };
    }

    pub fn set_i32(&self, name: &str, value: i32) {
        unsafe { self.gl.uniform_1_i32(self.location(name).as_ref(), value) };
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) };
    }
}

fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::NativeShader, RendererError> {
    let kind = match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    };
    let shader = unsafe { gl.create_shader(kind) }.map_err(RendererError::Allocation)?;
    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
    }
    if !unsafe { gl.get_shader_compile_status(shader) } {
        let log = unsafe { gl.get_shader_info_log(shader) };
        unsafe { gl.delete_shader(shader) };
        return Err(RendererError::ShaderCompile { stage, log });
    }
    Ok(shader)
}

/// Name of one element of an indexed uniform array, e.g. `lightColors[1]`.
pub(crate) fn indexed_uniform(name: &str, index: usize) -> String {
    format!("{}[{}]", name, index)
}
