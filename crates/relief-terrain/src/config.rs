//! Terrain configuration with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use relief_noise::NoiseParams;

use crate::curve::HeightCurve;
use crate::error::TerrainError;
use crate::regions::RegionPalette;

/// Side length of a standard terrain chunk, in cells.
///
/// The 240 cells between the first and last vertex divide evenly by every
/// level-of-detail stride (2, 4, 6, 8, 10, and 12), so coarser meshes keep
/// their edge vertices on the chunk border.
pub const CHUNK_SIZE: u32 = 241;

/// Top-level terrain generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise parameters for the height field.
    pub noise: NoiseParams,
    /// Vertical scale applied to curved heights.
    pub height_multiplier: f64,
    /// Remapping curve applied to heights before scaling.
    pub height_curve: HeightCurve,
    /// Mesh level of detail (0 = full resolution).
    pub level_of_detail: u32,
    /// Color bands for the rendered map.
    pub palette: RegionPalette,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            noise: NoiseParams::default(),
            height_multiplier: 20.0,
            height_curve: HeightCurve::default(),
            level_of_detail: 0,
            palette: RegionPalette::default(),
        }
    }
}

impl TerrainConfig {
    /// Load config from `path`, or create a default config file there.
    pub fn load_or_create(path: &Path) -> Result<Self, TerrainError> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = TerrainConfig::default();
            config.save(path)?;
            log::info!("Created default terrain config at {}", path.display());
            Ok(config)
        }
    }

    /// Load config from the RON file at `path`.
    pub fn load(path: &Path) -> Result<Self, TerrainError> {
        let contents = std::fs::read_to_string(path).map_err(TerrainError::ReadError)?;
        let config: TerrainConfig = ron::from_str(&contents).map_err(TerrainError::ParseError)?;
        log::info!("Loaded terrain config from {}", path.display());
        Ok(config)
    }

    /// Save config as RON to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), TerrainError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TerrainError::WriteError)?;
        }

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(TerrainError::SerializeError)?;

        std::fs::write(path, serialized).map_err(TerrainError::WriteError)?;
        Ok(())
    }
}
