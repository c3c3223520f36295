//! Noise generation parameters and their boundary clamps.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::kernel::KernelKind;

/// Smallest usable sample scale. Smaller values are raised to this bound
/// before generation.
pub const MIN_SCALE: f64 = 0.1;

/// Largest supported octave count. Larger values are lowered to this bound
/// before generation.
pub const MAX_OCTAVES: u32 = 29;

/// Smallest usable lacunarity. Frequency must not shrink between octaves.
pub const MIN_LACUNARITY: f64 = 1.0;

/// Configuration for multi-octave fractal noise generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Seed for the per-octave offset stream.
    pub seed: u64,
    /// Zoom factor: grid coordinates are divided by this before sampling.
    /// Larger values produce broader features. Clamped to at least
    /// [`MIN_SCALE`].
    pub scale: f64,
    /// Number of noise layers to composite. More octaves add finer detail at
    /// the cost of additional computation. Clamped to at most [`MAX_OCTAVES`].
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves. Each octave's
    /// amplitude is `persistence^octave_index`. Default: 0.5.
    pub persistence: f64,
    /// Frequency multiplier between successive octaves. Each octave's
    /// frequency is `lacunarity^octave_index`. Clamped to at least
    /// [`MIN_LACUNARITY`]. Default: 2.0.
    pub lacunarity: f64,
    /// World-space offset added to every octave's sample position, for
    /// panning across the noise.
    pub offset: DVec2,
    /// Which gradient kernel evaluates the octave samples.
    pub kernel: KernelKind,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 25.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            offset: DVec2::ZERO,
            kernel: KernelKind::Perlin,
        }
    }
}

impl NoiseParams {
    /// Return a copy with every out-of-range value clamped to its bound.
    pub fn clamped(&self) -> Self {
        let mut params = self.clone();
        params.scale = params.scale.max(MIN_SCALE);
        params.octaves = params.octaves.min(MAX_OCTAVES);
        params.lacunarity = params.lacunarity.max(MIN_LACUNARITY);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_raises_scale_floor() {
        let params = NoiseParams {
            scale: 0.0,
            ..Default::default()
        };
        assert_eq!(params.clamped().scale, MIN_SCALE);
    }

    #[test]
    fn test_clamped_lowers_octave_ceiling() {
        let params = NoiseParams {
            octaves: 100,
            ..Default::default()
        };
        assert_eq!(params.clamped().octaves, MAX_OCTAVES);
    }

    #[test]
    fn test_clamped_raises_lacunarity_floor() {
        let params = NoiseParams {
            lacunarity: 0.25,
            ..Default::default()
        };
        assert_eq!(params.clamped().lacunarity, MIN_LACUNARITY);
    }

    #[test]
    fn test_clamped_leaves_valid_params_alone() {
        let params = NoiseParams {
            scale: 50.0,
            octaves: 8,
            lacunarity: 2.5,
            ..Default::default()
        };
        assert_eq!(params.clamped(), params);
    }
}
