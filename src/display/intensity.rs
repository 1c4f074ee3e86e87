//! Intensity mapping for display
//!
//! Maps analysis values into `[0, 1]` so a renderer can use them directly as
//! opacity or color-ramp positions. Non-finite values never escape: degenerate
//! frames map to zero intensity.

use serde::{Deserialize, Serialize};

/// Curve mapping a non-negative value into `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlphaConverter {
    /// `clamp(v, 0, 1)`
    #[default]
    Linear,
    /// `1 - exp(-max(0, v))`
    Exponential,
    /// `1 - 1 / (1 + max(0, v))`
    Inverse,
}

impl AlphaConverter {
    /// Map `value` into `[0, 1]`; `NaN` maps to 0
    pub fn convert(self, value: f32) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        match self {
            AlphaConverter::Linear => value.clamp(0.0, 1.0),
            AlphaConverter::Exponential => 1.0 - (-value.max(0.0)).exp(),
            AlphaConverter::Inverse => 1.0 - 1.0 / (1.0 + value.max(0.0)),
        }
    }
}

/// Decibel window mapped linearly onto `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecibelRange {
    /// Level mapped to 0
    pub min_db: f32,
    /// Level mapped to 1
    pub max_db: f32,
}

impl Default for DecibelRange {
    fn default() -> Self {
        Self {
            min_db: -100.0,
            max_db: -30.0,
        }
    }
}

impl DecibelRange {
    /// Create a range
    pub fn new(min_db: f32, max_db: f32) -> Self {
        Self { min_db, max_db }
    }

    /// `max(0, db - min) / (max - min)`, not clamped above
    ///
    /// Use with an [`AlphaConverter`] to bound the top end. `-inf` (silence)
    /// and `NaN` map to 0.
    pub fn normalize(&self, db: f32) -> f32 {
        if db.is_nan() || db == f32::NEG_INFINITY {
            return 0.0;
        }
        (db - self.min_db).max(0.0) / (self.max_db - self.min_db)
    }

    /// Normalize then apply `converter`
    pub fn intensity(&self, db: f32, converter: AlphaConverter) -> f32 {
        converter.convert(self.normalize(db))
    }
}

/// Scale a chroma vector so its largest finite slot is 1
///
/// `+inf` slots saturate at 1, `NaN` and negative slots map to 0. A vector
/// with no positive finite slot maps the finite slots to 0.
pub fn normalize_chroma(chroma: &[f32]) -> Vec<f32> {
    let max = chroma
        .iter()
        .copied()
        .filter(|c| c.is_finite())
        .fold(0.0f32, f32::max);

    chroma
        .iter()
        .map(|&c| {
            if c == f32::INFINITY {
                1.0
            } else if c.is_finite() && max > 0.0 {
                (c / max).max(0.0)
            } else {
                0.0
            }
        })
        .collect()
}
