//! Axis-aligned gradient noise over an integer lattice.

use glam::DVec2;
use relief_field::lerp;

use crate::permutation::PermutationTable;

// Consecutive Fibonacci numbers used to scramble lattice coordinates.
const HASH_MUL_X: i64 = 1_836_311_903;
const HASH_MUL_Y: i64 = 2_971_215_073;
const HASH_ADD_Y: i64 = 4_807_526_976;

/// Gradient noise driven by a permutation table, with corner gradients
/// restricted to the four axis directions.
///
/// Output lies in `[-1, 1]` and is exactly 0 at integer lattice points. A
/// kernel is a pure function once its table is fixed, so samples are
/// deterministic and safe to take from any thread.
#[derive(Clone, Debug)]
pub struct LatticeNoise {
    table: PermutationTable,
}

impl LatticeNoise {
    /// Kernel backed by the canonical permutation table.
    pub fn new() -> Self {
        Self {
            table: PermutationTable::canonical(),
        }
    }

    /// Kernel backed by a seeded table shuffle.
    pub fn seeded(seed: u64) -> Self {
        Self {
            table: PermutationTable::seeded(seed),
        }
    }

    /// Kernel backed by an explicit table.
    pub fn with_table(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Evaluate the noise at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let cell_x = x.floor();
        let cell_y = y.floor();

        // Fractional position inside the lattice cell.
        let u = x - cell_x;
        let v = y - cell_y;

        let xi = cell_x as i64;
        let yi = cell_y as i64;

        let g00 = self.corner_gradient(xi, yi);
        let g10 = self.corner_gradient(xi.wrapping_add(1), yi);
        let g01 = self.corner_gradient(xi, yi.wrapping_add(1));
        let g11 = self.corner_gradient(xi.wrapping_add(1), yi.wrapping_add(1));

        // Dot each corner's gradient with the vector from that corner to the
        // sample point.
        let d00 = g00.dot(DVec2::new(u, v));
        let d10 = g10.dot(DVec2::new(u - 1.0, v));
        let d01 = g01.dot(DVec2::new(u, v - 1.0));
        let d11 = g11.dot(DVec2::new(u - 1.0, v - 1.0));

        let su = fade(u);
        let sv = fade(v);

        let near = lerp(d00, d10, su);
        let far = lerp(d01, d11, su);
        lerp(near, far, sv)
    }

    /// Pick the axis gradient for an integer lattice corner.
    ///
    /// The corner coordinates are scrambled with wrapping Fibonacci-constant
    /// arithmetic and the low two bits of the table entry select one of the
    /// four axis directions.
    fn corner_gradient(&self, x: i64, y: i64) -> DVec2 {
        let hash =
            x.wrapping_mul(HASH_MUL_X) ^ y.wrapping_mul(HASH_MUL_Y).wrapping_add(HASH_ADD_Y);
        match self.table.get(hash as usize) & 3 {
            0 => DVec2::X,
            1 => DVec2::NEG_X,
            2 => DVec2::Y,
            _ => DVec2::NEG_Y,
        }
    }
}

impl Default for LatticeNoise {
    fn default() -> Self {
        Self::new()
    }
}

/// Quintic smoothing curve `6t^5 - 15t^4 + 10t^3`.
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`, which keeps
/// the interpolated surface smooth across cell boundaries.
#[inline]
fn fade(t: f64) -> f64 {
    ((t * 6.0 - 15.0) * t + 10.0) * t * t * t
}
