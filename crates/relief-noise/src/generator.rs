//! Multi-octave field generation with two-phase min-max normalization.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use relief_field::{HeightField, inverse_lerp};

use crate::error::NoiseError;
use crate::kernel::Kernel;
use crate::params::NoiseParams;

/// Bound of the per-octave offset draw. Each octave offset component lands in
/// `[-OFFSET_RANGE, OFFSET_RANGE)` before the caller offset is added.
const OFFSET_RANGE: i32 = 100_000;

/// Generates normalized heightfields from layered gradient noise.
///
/// Construction fixes the grid size, the clamped parameters, the kernel, and
/// the per-octave sample offsets. [`generate`](Self::generate) is then
/// deterministic: the same generator always produces bit-identical fields.
pub struct FieldGenerator {
    width: u32,
    height: u32,
    params: NoiseParams,
    kernel: Kernel,
    octave_offsets: Vec<DVec2>,
}

impl FieldGenerator {
    /// Create a generator for a `width x height` grid.
    ///
    /// Out-of-range parameters are clamped (see [`NoiseParams::clamped`]) and
    /// the kernel is the default for `params.kernel`.
    pub fn new(width: u32, height: u32, params: NoiseParams) -> Result<Self, NoiseError> {
        let kernel = Kernel::from_kind(params.kernel);
        Self::with_kernel(width, height, params, kernel)
    }

    /// Create a generator with an explicitly constructed kernel, e.g. a
    /// lattice kernel over a seeded table shuffle.
    pub fn with_kernel(
        width: u32,
        height: u32,
        params: NoiseParams,
        kernel: Kernel,
    ) -> Result<Self, NoiseError> {
        if width == 0 || height == 0 {
            return Err(NoiseError::EmptyField { width, height });
        }
        let params = params.clamped();
        let octave_offsets = draw_octave_offsets(&params);
        Ok(Self {
            width,
            height,
            params,
            kernel,
            octave_offsets,
        })
    }

    /// The clamped parameters in effect.
    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// The per-octave sample offsets drawn from the seed, in octave order.
    pub fn octave_offsets(&self) -> &[DVec2] {
        &self.octave_offsets
    }

    /// Unnormalized octave accumulation at grid cell `(x, y)`.
    ///
    /// Sample coordinates are centered using half the grid width on both
    /// axes, so a non-square grid is centered along x but shifted along y.
    /// Each octave contributes `kernel(coord * frequency + offset) * amplitude`
    /// with amplitude decaying by `persistence` and frequency growing by
    /// `lacunarity`.
    pub fn raw_height(&self, x: u32, y: u32) -> f64 {
        // Half the width serves as the half-extent for both axes.
        let half_extent = self.width as f64 / 2.0;

        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut total = 0.0;

        for offset in &self.octave_offsets {
            let sample_x = (x as f64 - half_extent) / self.params.scale * frequency + offset.x;
            let sample_y = (y as f64 - half_extent) / self.params.scale * frequency + offset.y;
            total += self.kernel.sample(sample_x, sample_y) * amplitude;

            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        total
    }

    /// Generate the normalized field.
    ///
    /// Runs in two phases: accumulate the raw octave sums for every cell while
    /// tracking their minimum and maximum, then remap each cell into `[0, 1]`
    /// by inverse linear interpolation against the observed extremes. The
    /// lowest cell maps to exactly 0 and the highest to exactly 1. A constant
    /// accumulation (for example zero octaves) normalizes to a uniform 0.5
    /// field.
    pub fn generate(&self) -> HeightField {
        let mut raw = Vec::with_capacity((self.width * self.height) as usize);
        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for y in 0..self.height {
            for x in 0..self.width {
                let value = self.raw_height(x, y);
                min = min.min(value);
                max = max.max(value);
                raw.push(value);
            }
        }

        if min == max {
            return HeightField::filled(self.width, self.height, 0.5);
        }

        let normalized = raw
            .into_iter()
            .map(|value| inverse_lerp(min, max, value))
            .collect();
        HeightField::from_vec(self.width, self.height, normalized)
    }
}

/// Generate a normalized heightfield in one call.
///
/// Equivalent to constructing a [`FieldGenerator`] and calling
/// [`generate`](FieldGenerator::generate) once.
pub fn generate_height_field(
    width: u32,
    height: u32,
    params: &NoiseParams,
) -> Result<HeightField, NoiseError> {
    Ok(FieldGenerator::new(width, height, params.clone())?.generate())
}

/// Draw one sample offset per octave from the seeded stream, x before y,
/// octave 0 first. The caller-supplied global offset is folded in here so the
/// accumulation loop adds a single vector per octave.
fn draw_octave_offsets(params: &NoiseParams) -> Vec<DVec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    (0..params.octaves)
        .map(|_| {
            let x = rng.random_range(-OFFSET_RANGE..OFFSET_RANGE) as f64 + params.offset.x;
            let y = rng.random_range(-OFFSET_RANGE..OFFSET_RANGE) as f64 + params.offset.y;
            DVec2::new(x, y)
        })
        .collect()
}
