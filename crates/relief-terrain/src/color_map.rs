//! Flat RGBA color maps rendered from height fields.

use relief_field::HeightField;

use crate::regions::RegionPalette;

/// A rendered color map, stored as row-major RGBA pixels.
#[derive(Clone, Debug)]
pub struct ColorMap {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl ColorMap {
    fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Render one pixel per field cell, colored by the band its height
    /// falls into.
    pub fn from_regions(field: &HeightField, palette: &RegionPalette) -> Self {
        let (width, height) = field.dimensions();
        let mut map = Self::filled(width, height);
        for y in 0..height {
            for x in 0..width {
                let [r, g, b] = palette.color_for(field.get(x, y));
                map.set_pixel(x, y, r, g, b, 255);
            }
        }
        map
    }

    /// Render one grayscale pixel per field cell, black at height 0 and
    /// white at height 1.
    pub fn grayscale(field: &HeightField) -> Self {
        let (width, height) = field.dimensions();
        let mut map = Self::filled(width, height);
        for y in 0..height {
            for x in 0..width {
                let level = (field.get(x, y).clamp(0.0, 1.0) * 255.0) as u8;
                map.set_pixel(x, y, level, level, level, 255);
            }
        }
        map
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx] = r;
        self.pixels[idx + 1] = g;
        self.pixels[idx + 2] = b;
        self.pixels[idx + 3] = a;
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let idx = ((y * self.width + x) * 4) as usize;
        (
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Count the number of unique colors (ignoring alpha) in the map.
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::default_palette;

    #[test]
    fn test_color_map_correct_dimensions() {
        let field = HeightField::filled(16, 8, 0.5);
        let map = ColorMap::from_regions(&field, &default_palette());
        assert_eq!(map.dimensions(), (16, 8));
        assert_eq!(map.pixels.len(), 16 * 8 * 4);
    }

    #[test]
    fn test_uniform_field_renders_one_band() {
        let field = HeightField::filled(8, 8, 0.2);
        let map = ColorMap::from_regions(&field, &default_palette());
        assert_eq!(map.unique_color_count(), 1);
        assert_eq!(map.get_pixel(3, 4), (38, 62, 133, 255), "0.2 is deep water");
    }

    #[test]
    fn test_banded_field_renders_multiple_colors() {
        let mut field = HeightField::filled(8, 2, 0.0);
        for x in 0..8 {
            for y in 0..2 {
                field.set(x, y, x as f64 / 7.0);
            }
        }
        let map = ColorMap::from_regions(&field, &default_palette());
        assert!(
            map.unique_color_count() > 3,
            "a 0..1 ramp should cross several bands, got {}",
            map.unique_color_count()
        );
    }

    #[test]
    fn test_grayscale_endpoints() {
        let black = ColorMap::grayscale(&HeightField::filled(4, 4, 0.0));
        assert_eq!(black.get_pixel(0, 0), (0, 0, 0, 255));

        let white = ColorMap::grayscale(&HeightField::filled(4, 4, 1.0));
        assert_eq!(white.get_pixel(3, 3), (255, 255, 255, 255));
    }

    #[test]
    fn test_grayscale_clamps_out_of_range_heights() {
        let mut field = HeightField::filled(2, 1, 0.0);
        field.set(0, 0, -0.5);
        field.set(1, 0, 1.5);
        let map = ColorMap::grayscale(&field);
        assert_eq!(map.get_pixel(0, 0), (0, 0, 0, 255));
        assert_eq!(map.get_pixel(1, 0), (255, 255, 255, 255));
    }

    #[test]
    fn test_set_pixel_roundtrip() {
        let field = HeightField::filled(8, 8, 0.0);
        let mut map = ColorMap::grayscale(&field);
        map.set_pixel(2, 3, 10, 20, 30, 40);
        assert_eq!(map.get_pixel(2, 3), (10, 20, 30, 40));
    }
}
