//! Terrain assembly: height fields colored by region bands and meshed
//! into centered chunks, driven by a RON-persisted configuration.

mod color_map;
mod config;
mod curve;
mod error;
mod pipeline;
mod regions;

pub use color_map::ColorMap;
pub use config::{CHUNK_SIZE, TerrainConfig};
pub use curve::HeightCurve;
pub use error::TerrainError;
pub use pipeline::{GeneratedTerrain, generate_terrain};
pub use regions::{Region, RegionPalette, default_palette};
