//! The full field-to-terrain generation pipeline.

use relief_field::HeightField;
use relief_mesh::{TerrainMesh, build_terrain_mesh};
use relief_noise::generate_height_field;

use crate::color_map::ColorMap;
use crate::config::TerrainConfig;
use crate::error::TerrainError;

/// Everything produced for one terrain chunk.
#[derive(Clone, Debug)]
pub struct GeneratedTerrain {
    /// The normalized height field.
    pub field: HeightField,
    /// The color map rendered from the field.
    pub color_map: ColorMap,
    /// The triangle mesh built from the field.
    pub mesh: TerrainMesh,
}

/// Run the full pipeline for one chunk: height field, color map, and mesh.
pub fn generate_terrain(
    width: u32,
    height: u32,
    config: &TerrainConfig,
) -> Result<GeneratedTerrain, TerrainError> {
    let field = generate_height_field(width, height, &config.noise)?;
    let color_map = ColorMap::from_regions(&field, &config.palette);
    let mesh = build_terrain_mesh(
        &field,
        config.height_multiplier,
        |h| config.height_curve.evaluate(h),
        config.level_of_detail,
    );
    Ok(GeneratedTerrain {
        field,
        color_map,
        mesh,
    })
}
