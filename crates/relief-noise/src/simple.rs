//! Single-octave scrolling field sampling.

use glam::DVec2;
use noise::{NoiseFn, Perlin};

use relief_field::HeightField;

use crate::error::NoiseError;

/// Sample a single-octave field with no normalization pass.
///
/// Cell `(x, y)` samples the kernel at
/// `(x * scale / width + offset.x, y * scale / width + offset.y)`; both axes
/// are divided by the width, so `scale` spans the same noise distance
/// horizontally and vertically. Coordinates are not centered and values are
/// remapped to `[0, 1]` directly, which makes the field scroll continuously
/// as `offset` advances between calls.
pub fn simple_field(
    width: u32,
    height: u32,
    scale: f64,
    offset: DVec2,
) -> Result<HeightField, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::EmptyField { width, height });
    }

    let perlin = Perlin::new(0);
    let mut data = Vec::with_capacity((width * height) as usize);

    for y in 0..height {
        for x in 0..width {
            let sample_x = x as f64 * scale / width as f64 + offset.x;
            let sample_y = y as f64 * scale / width as f64 + offset.y;
            let raw = perlin.get([sample_x, sample_y]);
            // Normalize from [-1, 1] to [0, 1].
            data.push((raw + 1.0) * 0.5);
        }
    }

    Ok(HeightField::from_vec(width, height, data))
}
