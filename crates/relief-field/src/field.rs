//! A 2D scalar field stored as a flat row-major array.

/// A fixed-size 2D grid of `f64` values, stored row-major.
///
/// Cells are addressed as `(x, y)` with `x` running along a row. Once filled
/// by a generation pass the field is treated as immutable by downstream
/// consumers (coloring, meshing).
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl HeightField {
    /// Create a field with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn filled(width: u32, height: u32, value: f64) -> Self {
        assert!(
            width > 0 && height > 0,
            "field dimensions must be non-zero"
        );
        Self {
            width,
            height,
            data: vec![value; (width * height) as usize],
        }
    }

    /// Create a field from an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero, or if `data.len()` does not
    /// equal `width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<f64>) -> Self {
        assert!(
            width > 0 && height > 0,
            "field dimensions must be non-zero"
        );
        assert_eq!(
            data.len(),
            (width * height) as usize,
            "data length must match field dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Field width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[(y * self.width + x) as usize]
    }

    /// Set the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        self.data[(y * self.width + x) as usize] = value;
    }

    /// The underlying row-major buffer.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}
