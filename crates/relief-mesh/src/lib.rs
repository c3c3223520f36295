//! Grid mesh construction from height fields.
//!
//! Turns a normalized height field into a centered triangle mesh, with a
//! level-of-detail stride that trades vertex density for triangle count.

mod builder;
mod terrain_mesh;

pub use builder::{MAX_LEVEL_OF_DETAIL, build_terrain_mesh, simplification_step};
pub use terrain_mesh::TerrainMesh;
