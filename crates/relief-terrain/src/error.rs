//! Terrain pipeline error types.

use relief_noise::NoiseError;

/// Errors that can occur when generating terrain or handling its configuration.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// Field generation rejected its inputs.
    #[error("noise generation failed: {0}")]
    Noise(#[from] NoiseError),

    /// Failed to read the config file from disk.
    #[error("failed to read terrain config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write terrain config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse terrain config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// A height curve was built or parsed without any keys.
    #[error("a height curve needs at least one key")]
    EmptyCurve,

    /// Palette bands were built or parsed out of order.
    #[error("palette bands must be ordered by ascending max_height: {first} comes before {second}")]
    MisorderedPalette {
        /// Name of the band that appears first.
        first: String,
        /// Name of the misplaced band that follows it.
        second: String,
    },

    /// Failed to serialize config to RON.
    #[error("failed to serialize terrain config: {0}")]
    SerializeError(#[source] ron::Error),
}
