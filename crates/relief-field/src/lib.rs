//! Scalar heightfield grid and the interpolation helpers shared across the
//! workspace.

mod field;
mod math;

pub use field::HeightField;
pub use math::{inverse_lerp, lerp};
