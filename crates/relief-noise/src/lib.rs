//! Fractal gradient-noise field synthesis.
//!
//! Composites multiple octaves of 2D gradient noise into a min-max normalized
//! heightfield. Two interchangeable kernels evaluate the octave samples: the
//! library Perlin kernel and a permutation-table lattice kernel with
//! axis-aligned gradients.

mod error;
mod generator;
mod kernel;
mod lattice;
mod params;
mod permutation;
mod simple;

pub use error::NoiseError;
pub use generator::{FieldGenerator, generate_height_field};
pub use kernel::{Kernel, KernelKind};
pub use lattice::LatticeNoise;
pub use params::{MAX_OCTAVES, MIN_LACUNARITY, MIN_SCALE, NoiseParams};
pub use permutation::PermutationTable;
pub use simple::simple_field;
