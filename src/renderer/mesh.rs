use std::mem::size_of;
use std::rc::Rc;

use glow::HasContext;

use super::error::RendererError;

/// Interleaved vertex layout of the scene buffer: object-space position,
/// authored normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub const FLOATS_PER_VERTEX: usize = 8;

/// One immutable, non-indexed triangle buffer with its attribute bindings.
pub struct Mesh {
    gl: Rc<glow::Context>,
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    vertex_count: i32,
}

impl Mesh {
    /// Uploads the interleaved vertex slice once as a static buffer.
    pub fn upload(gl: Rc<glow::Context>, vertices: &[f32]) -> Result<Self, RendererError> {
        debug_assert_eq!(vertices.len() % FLOATS_PER_VERTEX, 0);
        let vertex_count = (vertices.len() / FLOATS_PER_VERTEX) as i32;

        let vao = unsafe { gl.create_vertex_array() }.map_err(RendererError::Allocation)?;
        let vbo = match unsafe { gl.create_buffer() } {
            Ok(vbo) => vbo,
            Err(msg) => {
                unsafe { gl.delete_vertex_array(vao) };
                return Err(RendererError::Allocation(msg));
            }
        };

        let stride = size_of::<Vertex>() as i32;
        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);

            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * size_of::<f32>() as i32);
            gl.enable_vertex_attrib_array(1);

            gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, stride, 6 * size_of::<f32>() as i32);
            gl.enable_vertex_attrib_array(2);

            gl.bind_vertex_array(None);
        }

        Ok(Self {
            gl,
            vao,
            vbo,
            vertex_count,
        })
    }

    pub fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.vao)) };
    }

    /// Issues the draw call; the caller binds the vertex array and program.
    pub fn draw(&self) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count) };
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Vertex, FLOATS_PER_VERTEX};
    use crate::scene::geometry::SCENE_VERTICES;
    use std::mem::size_of;

    #[test]
    fn vertex_layout_matches_stride() {
        assert_eq!(size_of::<Vertex>(), FLOATS_PER_VERTEX * size_of::<f32>());
    }

    #[test]
    fn scene_buffer_byte_length_divides_into_whole_vertices() {
        // the count the upload derives: buffer bytes over stride bytes
        let bytes = SCENE_VERTICES.len() * size_of::<f32>();
        assert_eq!(bytes % size_of::<Vertex>(), 0);
        assert_eq!(bytes / size_of::<Vertex>(), 180);
    }
}
