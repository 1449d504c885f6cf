//! Authored geometry of the static scene: a folded pad of paper (top sheet
//! plus the yellow pad block underneath), a backdrop plane, a small pyramid
//! prop, and a desk lamp block.
//!
//! The buffer is non-indexed: every triangle repeats its three vertices.
//! Each vertex is 8 floats: position, authored normal, texture coordinate.

use crate::renderer::mesh::FLOATS_PER_VERTEX;

#[rustfmt::skip]
pub const SCENE_VERTICES: &[f32] = &[
    // paper sheet, edge strips
    -1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    -1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    -1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 0.0,

    -1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    -1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    -1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    0.0, 1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 1.0,
    -1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    0.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    -1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    -1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,

    1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, 1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 1.0,
    0.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, 1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 1.0,

    0.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 0.0,

    0.0, -1.0, -0.1,   1.0, 1.0, 1.0,   1.0, 0.0,
    0.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 0.0,
    1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,

    0.0, -1.0, -0.1,   1.0, 1.0, 1.0,   1.0, 0.0,
    -1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,

    -1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 0.0,
    -1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, -1.0, -0.1,   1.0, 1.0, 1.0,   1.0, 1.0,

    // paper sheet, front face
    0.0, 1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 1.0,
    -1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    0.0, -1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 0.0,

    -1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    0.0, -1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 0.0,
    -1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 0.0,

    1.0, 1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 1.0,
    0.0, 1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 1.0,
    1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 0.0,

    0.0, 1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 1.0,
    0.0, -1.0, 0.0,   1.0, 1.0, 1.0,   0.0, 0.0,
    1.0, -1.0, 0.0,   1.0, 1.0, 1.0,   1.0, 0.0,

    // paper sheet, underside
    1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    0.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    -1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    -1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    -1.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    0.0, 1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    0.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,
    1.0, -1.0, -0.1,   1.0, 1.0, 1.0,   0.0, 0.0,

    // pad block, top face
    0.0, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    // pad block, edge strips
    1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    0.0, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,

    1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,

    1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    0.0, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,

    // pad block, top face
    -1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    -1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    // pad block, edge strips
    0.0, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,

    0.0, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,

    -1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,

    -1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, 1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    -1.1, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    -1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,

    -1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, -1.1, -0.1,   1.0, 1.0, 0.0,   2.0, 2.0,
    0.0, -1.1, -0.2,   1.0, 1.0, 0.0,   2.0, 2.0,

    // pad block, underside
    1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    0.0, 1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,

    0.0, -1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    0.0, 1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,

    -1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    0.0, 1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    0.0, -1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,

    -1.1, 1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    0.0, -1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,
    -1.1, -1.1, -0.2,   1.0, 1.0, 0.0,   0.0, 0.0,

    // backdrop plane
    8.0, 2.0, -0.2,   1.0, 1.0, 1.0,   2.0, 2.0,
    8.0, -2.0, -0.2,   1.0, 1.0, 1.0,   2.0, 2.0,
    -4.0, 2.0, -0.2,   1.0, 1.0, 1.0,   2.0, 2.0,

    8.0, -2.0, -0.2,   1.0, 1.0, 1.0,   2.0, 2.0,
    -4.0, 2.0, -0.2,   1.0, 1.0, 1.0,   2.0, 2.0,
    -4.0, -2.0, -0.2,   1.0, 1.0, 1.0,   2.0, 2.0,

    // pyramid prop, base
    1.5, -0.9, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.7, -0.9, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.7, -1.1, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    1.5, -0.9, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.7, -1.1, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.5, -1.1, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    // pyramid prop, sides
    1.6, -1.0, -0.1,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.5, -0.9, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.7, -0.9, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    1.6, -1.0, -0.1,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.7, -0.9, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.7, -1.1, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    1.6, -1.0, -0.1,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.5, -0.9, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.5, -1.1, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    1.6, -1.0, -0.1,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.7, -1.1, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    1.5, -1.1, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    // desk lamp block, bottom face
    5.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    5.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    // desk lamp block, top face
    5.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,

    5.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,

    // desk lamp block, sides
    5.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,

    5.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    5.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,

    5.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,

    4.0, 1.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,

    4.0, 1.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,

    5.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,

    5.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    4.0, 0.0, 1.0,   0.0, 0.0, 0.0,   2.0, 2.0,
    5.0, 0.0, -0.2,   0.0, 0.0, 0.0,   2.0, 2.0,
];

/// Number of vertices described by [`SCENE_VERTICES`].
pub const fn vertex_count() -> usize {
    SCENE_VERTICES.len() / FLOATS_PER_VERTEX
}

#[cfg(test)]
mod tests {
    use super::{vertex_count, SCENE_VERTICES};
    use crate::renderer::mesh::{Vertex, FLOATS_PER_VERTEX};

    #[test]
    fn buffer_holds_whole_vertices_and_whole_triangles() {
        assert_eq!(SCENE_VERTICES.len() % FLOATS_PER_VERTEX, 0);
        assert_eq!(vertex_count() % 3, 0);
        assert_eq!(vertex_count(), 180);
    }

    #[test]
    fn buffer_casts_to_the_vertex_layout() {
        let vertices: &[Vertex] = bytemuck::cast_slice(SCENE_VERTICES);
        assert_eq!(vertices.len(), vertex_count());
        // the first vertex is the top-left corner of the paper sheet
        assert_eq!(vertices[0].position, [-1.0, 1.0, 0.0]);
        assert_eq!(vertices[0].uv, [1.0, 1.0]);
    }

    #[test]
    fn positions_stay_within_the_scene_bounds() {
        let vertices: &[Vertex] = bytemuck::cast_slice(SCENE_VERTICES);
        for vertex in vertices {
            let [x, y, z] = vertex.position;
            assert!((-4.0..=8.0).contains(&x), "x out of bounds: {}", x);
            assert!((-2.0..=2.0).contains(&y), "y out of bounds: {}", y);
            assert!((-0.2..=1.0).contains(&z), "z out of bounds: {}", z);
        }
    }
}
