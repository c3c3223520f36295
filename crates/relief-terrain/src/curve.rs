//! Piecewise-linear height remapping curves.

use serde::{Deserialize, Serialize};

use relief_field::{inverse_lerp, lerp};

use crate::error::TerrainError;

/// A piecewise-linear curve over normalized heights.
///
/// Keys are `(position, value)` pairs sorted by position. Evaluation
/// interpolates linearly between the two surrounding keys and holds the end
/// values outside the keyed range, so a curve can flatten water below a sea
/// level or exaggerate peaks without touching the field itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveKeys")]
pub struct HeightCurve {
    keys: Vec<(f64, f64)>,
}

/// Serialized form of [`HeightCurve`]; parsed curves revalidate through
/// [`HeightCurve::validated`].
#[derive(Deserialize)]
#[serde(rename = "HeightCurve")]
struct CurveKeys {
    keys: Vec<(f64, f64)>,
}

impl TryFrom<CurveKeys> for HeightCurve {
    type Error = TerrainError;

    fn try_from(raw: CurveKeys) -> Result<Self, Self::Error> {
        Self { keys: raw.keys }.validated()
    }
}

impl HeightCurve {
    /// Create a curve from `(position, value)` keys. Keys are sorted by
    /// position; their order in `keys` does not matter.
    ///
    /// # Panics
    ///
    /// Panics if `keys` is empty.
    pub fn new(keys: Vec<(f64, f64)>) -> Self {
        match (Self { keys }).validated() {
            Ok(curve) => curve,
            Err(err) => panic!("{err}"),
        }
    }

    /// Sort the keys by position and reject a curve without keys.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::EmptyCurve`] if there are no keys.
    pub fn validated(mut self) -> Result<Self, TerrainError> {
        if self.keys.is_empty() {
            return Err(TerrainError::EmptyCurve);
        }
        self.keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(self)
    }

    /// The identity curve: every height maps to itself.
    pub fn identity() -> Self {
        Self::new(vec![(0.0, 0.0), (1.0, 1.0)])
    }

    /// A curve that holds everything below `sea_level` flat at zero, then
    /// rises linearly to full height.
    ///
    /// # Panics
    ///
    /// Panics if `sea_level` is outside `[0, 1]`.
    pub fn flat_shore(sea_level: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&sea_level),
            "sea level must be within [0, 1], got {sea_level}"
        );
        Self::new(vec![(0.0, 0.0), (sea_level, 0.0), (1.0, 1.0)])
    }

    /// Evaluate the curve at `position`.
    pub fn evaluate(&self, position: f64) -> f64 {
        let (first_pos, first_value) = self.keys[0];
        let (last_pos, last_value) = self.keys[self.keys.len() - 1];
        if position <= first_pos {
            return first_value;
        }
        if position >= last_pos {
            return last_value;
        }
        for pair in self.keys.windows(2) {
            let (p0, v0) = pair[0];
            let (p1, v1) = pair[1];
            if position <= p1 {
                return lerp(v0, v1, inverse_lerp(p0, p1, position));
            }
        }
        last_value
    }

    /// The curve's keys, sorted by position.
    pub fn keys(&self) -> &[(f64, f64)] {
        &self.keys
    }
}

impl Default for HeightCurve {
    fn default() -> Self {
        Self::identity()
    }
}
