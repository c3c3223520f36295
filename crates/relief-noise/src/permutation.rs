//! The 256-entry permutation table backing the lattice kernel.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Number of entries in a permutation table.
pub const TABLE_SIZE: usize = 256;

/// Ken Perlin's reference permutation, used as the fixed default table.
const CANONICAL: [u8; TABLE_SIZE] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// An immutable permutation of the 256 byte values, used to assign
/// pseudo-random gradients to lattice corners.
///
/// A table is fixed at construction and never mutated, so kernels built on it
/// are pure functions of their input coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable([u8; TABLE_SIZE]);

impl PermutationTable {
    /// The fixed reference permutation. Kernels built on this table produce
    /// identical output across processes and platforms.
    pub fn canonical() -> Self {
        Self(CANONICAL)
    }

    /// A seeded Fisher-Yates shuffle of the byte values. The same seed always
    /// produces the same table.
    pub fn seeded(seed: u64) -> Self {
        let mut values: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        values.shuffle(&mut rng);
        Self(values)
    }

    /// Table entry for an index. Only the low 8 bits of `index` are used, so
    /// any hash value can be passed directly.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.0[index & (TABLE_SIZE - 1)]
    }
}
