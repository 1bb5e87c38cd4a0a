use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Bounds must span at least one dimension")]
    Empty,

    #[error("Lower and upper bounds differ in length ({lower} vs {upper})")]
    LengthMismatch { lower: usize, upper: usize },

    #[error("Lower bound {lower} exceeds upper bound {upper} in dimension {dimension}")]
    Inverted {
        dimension: usize,
        lower: f64,
        upper: f64,
    },

    #[error("Non-finite limits [{lower}, {upper}] in dimension {dimension}")]
    NonFinite {
        dimension: usize,
        lower: f64,
        upper: f64,
    },
}

/// Axis-aligned box in parameter space from which candidate points are drawn.
///
/// Validated once at construction and immutable afterwards, so every design
/// built against the same `Bounds` shares one support.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.lower, raw.upper)
    }
}

impl Bounds {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, BoundsError> {
        if lower.len() != upper.len() {
            return Err(BoundsError::LengthMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(BoundsError::Empty);
        }

        for (dimension, (&lo, &hi)) in lower.iter().zip(&upper).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(BoundsError::NonFinite {
                    dimension,
                    lower: lo,
                    upper: hi,
                });
            }
            if lo > hi {
                return Err(BoundsError::Inverted {
                    dimension,
                    lower: lo,
                    upper: hi,
                });
            }
        }

        Ok(Self { lower, upper })
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn spans(&self) -> impl Iterator<Item = f64> + '_ {
        self.lower.iter().zip(&self.upper).map(|(lo, hi)| hi - lo)
    }

    /// Maps a normalized coordinate in `[0, 1]^n` onto the physical box.
    ///
    /// Each component is `lower[i] + z[i] * (upper[i] - lower[i])`, clamped so
    /// that rounding can never push a value past `upper[i]`.
    pub fn scale(&self, normalized: &[f64]) -> Vec<f64> {
        debug_assert_eq!(normalized.len(), self.dimensions());
        normalized
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .map(|(&z, (&lo, &hi))| (lo + z * (hi - lo)).clamp(lo, hi))
            .collect()
    }

    pub fn contains(&self, physical: &[f64]) -> bool {
        physical.len() == self.dimensions()
            && physical
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&x, (&lo, &hi))| x >= lo && x <= hi)
    }
}
