//! Mesh construction over a height field with a configurable sampling stride.

use glam::Vec3;

use relief_field::HeightField;

use crate::terrain_mesh::TerrainMesh;

/// Highest meaningful level of detail; larger values are clamped.
pub const MAX_LEVEL_OF_DETAIL: u32 = 6;

/// Sampling stride for a level of detail.
///
/// Level 0 samples every cell (step 1); level `n` samples every `2n`-th
/// cell. Levels above [`MAX_LEVEL_OF_DETAIL`] behave like the maximum.
pub fn simplification_step(level_of_detail: u32) -> u32 {
    let level = level_of_detail.min(MAX_LEVEL_OF_DETAIL);
    if level == 0 { 1 } else { level * 2 }
}

/// Build a centered triangle mesh from a normalized height field.
///
/// The field is walked with the stride for `level_of_detail`; each visited
/// cell becomes one vertex. Elevation is `height_curve(value) * height_multiplier`,
/// so the curve can flatten or exaggerate height bands before scaling. The
/// mesh is centered on the origin in the XZ plane, and UVs span the full
/// field regardless of stride.
pub fn build_terrain_mesh(
    field: &HeightField,
    height_multiplier: f64,
    height_curve: impl Fn(f64) -> f64,
    level_of_detail: u32,
) -> TerrainMesh {
    let (width, height) = field.dimensions();
    let step = simplification_step(level_of_detail);
    let vertices_per_line = (width - 1) / step + 1;
    let rows = (height - 1) / step + 1;

    let top_left_x = (width - 1) as f64 / 2.0;
    let top_left_z = (height - 1) as f64 / 2.0;

    let mut mesh = TerrainMesh::with_grid(vertices_per_line, rows);

    for row in 0..rows {
        for col in 0..vertices_per_line {
            let x = col * step;
            let y = row * step;

            let elevation = height_curve(field.get(x, y)) * height_multiplier;
            mesh.positions.push(Vec3::new(
                (top_left_x - x as f64) as f32,
                elevation as f32,
                (top_left_z - y as f64) as f32,
            ));
            mesh.uvs
                .push([x as f32 / width as f32, y as f32 / height as f32]);

            // Two triangles per cell, skipping the last sampled row and column.
            if col < vertices_per_line - 1 && row < rows - 1 {
                let vertex = row * vertices_per_line + col;
                mesh.push_triangle(
                    vertex,
                    vertex + vertices_per_line,
                    vertex + vertices_per_line + 1,
                );
                mesh.push_triangle(vertex, vertex + vertices_per_line + 1, vertex + 1);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplification_step_values() {
        assert_eq!(simplification_step(0), 1);
        assert_eq!(simplification_step(1), 2);
        assert_eq!(simplification_step(3), 6);
        assert_eq!(simplification_step(6), 12);
    }

    #[test]
    fn test_simplification_step_clamps_above_max() {
        assert_eq!(
            simplification_step(7),
            simplification_step(MAX_LEVEL_OF_DETAIL),
            "levels beyond the maximum should behave like the maximum"
        );
        assert_eq!(simplification_step(u32::MAX), 12);
    }

    #[test]
    fn test_full_resolution_buffer_sizes() {
        let field = HeightField::filled(5, 5, 0.5);
        let mesh = build_terrain_mesh(&field, 1.0, |h| h, 0);
        assert_eq!(mesh.vertex_count(), 25, "5x5 field should emit 25 vertices");
        assert_eq!(mesh.uvs.len(), 25);
        assert_eq!(
            mesh.indices.len(),
            96,
            "4x4 cells at 2 triangles each should emit 96 indices"
        );
    }

    #[test]
    fn test_vertex_counts_across_detail_levels() {
        let field = HeightField::filled(241, 241, 0.5);
        for (level, expected_per_line) in [
            (0, 241),
            (1, 121),
            (2, 61),
            (3, 41),
            (4, 31),
            (5, 25),
            (6, 21),
        ] {
            let mesh = build_terrain_mesh(&field, 1.0, |h| h, level);
            assert_eq!(
                mesh.vertex_count(),
                expected_per_line * expected_per_line,
                "unexpected vertex count at detail level {level}"
            );
        }
    }

    #[test]
    fn test_indices_in_bounds_for_non_dividing_stride() {
        // 7 cells between edge vertices do not divide by a step of 2; the
        // last field row and column simply go unsampled.
        let field = HeightField::filled(8, 8, 0.5);
        let mesh = build_terrain_mesh(&field, 1.0, |h| h, 1);
        assert_eq!(mesh.vertex_count(), 16);
        let n = mesh.vertex_count() as u32;
        for &idx in &mesh.indices {
            assert!(idx < n, "Index {idx} out of bounds (vertex count = {n})");
        }
    }

    #[test]
    fn test_rectangular_field_buffer_sizes() {
        let field = HeightField::filled(5, 3, 0.5);
        let mesh = build_terrain_mesh(&field, 1.0, |h| h, 0);
        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.indices.len(), 48, "4x2 cells should emit 48 indices");
        let n = mesh.vertex_count() as u32;
        for &idx in &mesh.indices {
            assert!(idx < n, "Index {idx} out of bounds (vertex count = {n})");
        }
    }

    #[test]
    fn test_mesh_is_centered() {
        let field = HeightField::filled(5, 5, 0.0);
        let mesh = build_terrain_mesh(&field, 1.0, |h| h, 0);
        let first = mesh.positions[0];
        let last = mesh.positions[mesh.positions.len() - 1];
        assert_eq!(first.x, 2.0);
        assert_eq!(first.z, 2.0);
        assert_eq!(last.x, -2.0);
        assert_eq!(last.z, -2.0);
    }

    #[test]
    fn test_curve_and_multiplier_shape_elevation() {
        let field = HeightField::filled(4, 4, 0.5);
        let mesh = build_terrain_mesh(&field, 10.0, |h| h * h, 0);
        for pos in &mesh.positions {
            assert!(
                (pos.y - 2.5).abs() < 1e-6,
                "expected curve(0.5) * 10 = 2.5, got {}",
                pos.y
            );
        }
    }

    #[test]
    fn test_uvs_in_range() {
        let field = HeightField::filled(9, 9, 0.5);
        let mesh = build_terrain_mesh(&field, 1.0, |h| h, 2);
        for uv in &mesh.uvs {
            assert!(uv[0] >= 0.0 && uv[0] <= 1.0, "U out of range: {}", uv[0]);
            assert!(uv[1] >= 0.0 && uv[1] <= 1.0, "V out of range: {}", uv[1]);
        }
    }

    #[test]
    fn test_higher_detail_level_reduces_vertices() {
        let field = HeightField::filled(25, 25, 0.5);
        let full = build_terrain_mesh(&field, 1.0, |h| h, 0);
        let coarse = build_terrain_mesh(&field, 1.0, |h| h, 1);
        assert_eq!(full.vertex_count(), 625);
        assert_eq!(coarse.vertex_count(), 169);
    }

    #[test]
    fn test_winding_order_for_small_grid() {
        let field = HeightField::filled(3, 3, 0.5);
        let mesh = build_terrain_mesh(&field, 1.0, |h| h, 0);
        assert_eq!(
            mesh.indices,
            vec![
                0, 3, 4, 0, 4, 1, //
                1, 4, 5, 1, 5, 2, //
                3, 6, 7, 3, 7, 4, //
                4, 7, 8, 4, 8, 5,
            ]
        );
    }
}
