//! Noise generation error types.

/// Errors that can occur when configuring field generation.
#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    /// The requested grid has no cells.
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    EmptyField {
        /// Requested grid width.
        width: u32,
        /// Requested grid height.
        height: u32,
    },
}
