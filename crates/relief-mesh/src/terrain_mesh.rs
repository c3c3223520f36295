//! Vertex, UV, and index buffers for a terrain chunk.

use glam::Vec3;

/// Triangle mesh data for one terrain chunk.
///
/// Positions and UVs are index-paired: `uvs[i]` belongs to `positions[i]`.
/// Every index refers into `positions`, three consecutive indices per
/// triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    /// Vertex positions, centered on the origin in the XZ plane.
    pub positions: Vec<Vec3>,
    /// Texture coordinates per vertex, spanning the source field.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices into `positions`.
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Create an empty mesh with exact capacity for a vertex grid of
    /// `vertices_per_line` columns and `rows` rows.
    pub fn with_grid(vertices_per_line: u32, rows: u32) -> Self {
        let vertex_count = (vertices_per_line * rows) as usize;
        let cell_count =
            (vertices_per_line.saturating_sub(1) * rows.saturating_sub(1)) as usize;
        Self {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(cell_count * 6),
        }
    }

    /// Append one triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
