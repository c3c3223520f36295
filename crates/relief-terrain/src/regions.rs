//! Height-banded terrain regions and their colors.

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// One height band of the terrain, such as water, sand, or snow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Display name of the band.
    pub name: String,
    /// Upper height bound of the band, inclusive.
    pub max_height: f64,
    /// RGB fill color.
    pub color: [u8; 3],
}

/// An ordered set of height bands covering `[0, 1]` from the bottom up.
///
/// Bands are checked in order; a height belongs to the first band whose
/// `max_height` it does not exceed. Heights above every band get the
/// fallback color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaletteBands")]
pub struct RegionPalette {
    regions: Vec<Region>,
    fallback: [u8; 3],
}

/// Serialized form of [`RegionPalette`]; parsed palettes revalidate through
/// [`RegionPalette::validated`].
#[derive(Deserialize)]
#[serde(rename = "RegionPalette")]
struct PaletteBands {
    regions: Vec<Region>,
    fallback: [u8; 3],
}

impl TryFrom<PaletteBands> for RegionPalette {
    type Error = TerrainError;

    fn try_from(raw: PaletteBands) -> Result<Self, Self::Error> {
        Self {
            regions: raw.regions,
            fallback: raw.fallback,
        }
        .validated()
    }
}

impl RegionPalette {
    /// Create a palette from bands ordered by ascending `max_height`.
    ///
    /// # Panics
    ///
    /// Panics if the bands are not in ascending `max_height` order.
    pub fn new(regions: Vec<Region>, fallback: [u8; 3]) -> Self {
        match (Self { regions, fallback }).validated() {
            Ok(palette) => palette,
            Err(err) => panic!("{err}"),
        }
    }

    /// Reject bands that are not in ascending `max_height` order.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::MisorderedPalette`] naming the offending pair.
    pub fn validated(self) -> Result<Self, TerrainError> {
        for pair in self.regions.windows(2) {
            if !(pair[0].max_height <= pair[1].max_height) {
                return Err(TerrainError::MisorderedPalette {
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }
        Ok(self)
    }

    /// The color for a normalized height.
    pub fn color_for(&self, height: f64) -> [u8; 3] {
        self.region_for(height)
            .map(|region| region.color)
            .unwrap_or(self.fallback)
    }

    /// The band a normalized height falls into, if any.
    pub fn region_for(&self, height: f64) -> Option<&Region> {
        self.regions
            .iter()
            .find(|region| height <= region.max_height)
    }

    /// All bands, ordered from lowest to highest.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl Default for RegionPalette {
    fn default() -> Self {
        default_palette()
    }
}

/// The stock island palette: water through sand, grass, rock, and snow.
pub fn default_palette() -> RegionPalette {
    RegionPalette::new(
        vec![
            band("deep water", 0.3, [38, 62, 133]),
            band("shallow water", 0.4, [52, 98, 195]),
            band("sand", 0.45, [210, 208, 125]),
            band("grass", 0.55, [86, 152, 23]),
            band("forest", 0.6, [62, 107, 18]),
            band("rock", 0.7, [90, 69, 62]),
            band("mountain", 0.9, [75, 60, 57]),
            band("snow", 1.0, [255, 255, 255]),
        ],
        [255, 255, 255],
    )
}

fn band(name: &str, max_height: f64, color: [u8; 3]) -> Region {
    Region {
        name: name.to_string(),
        max_height,
        color,
    }
}
