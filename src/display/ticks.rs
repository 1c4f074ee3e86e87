//! Axis tick layout for the scrolling graphs
//!
//! Ticks are described as (division index, label) pairs over a fixed number
//! of equal divisions of the axis; placing them in pixels is up to the
//! renderer.

use serde::{Deserialize, Serialize};

/// Smallest waveform display scale accepted
pub const MIN_WAVE_SCALE: f32 = 1e-4;

/// Divisions on the waveform amplitude axis
pub const WAVE_DIVISIONS: usize = 7;

/// Divisions on the spectrogram frequency axis
pub const FREQUENCY_DIVISIONS: usize = 32;

/// Tick layout for one axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticks {
    /// Division index of each tick, 0 at the top
    pub indices: Vec<usize>,
    /// Label of each tick
    pub labels: Vec<String>,
    /// Total number of divisions of the axis
    pub divisions: usize,
}

impl Ticks {
    /// Iterate over `(index, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.indices
            .iter()
            .copied()
            .zip(self.labels.iter().map(String::as_str))
    }
}

/// Clamp a waveform display scale to [`MIN_WAVE_SCALE`]
pub fn clamp_wave_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return MIN_WAVE_SCALE;
    }
    scale.max(MIN_WAVE_SCALE)
}

/// Amplitude ticks for a waveform drawn at `scale`
///
/// Top, middle and bottom of a 7-division axis, labelled with the amplitude
/// shown there (`1/scale`, `0`, `-1/scale`) at two significant digits.
pub fn wave_ticks(scale: f32) -> Ticks {
    let scale = clamp_wave_scale(scale);
    let top = 1.0 / scale;
    Ticks {
        indices: vec![0, 3, 6],
        labels: vec![
            to_precision(top, 2),
            to_precision(0.0, 2),
            to_precision(-top, 2),
        ],
        divisions: WAVE_DIVISIONS,
    }
}

/// Frequency-bin ticks for a spectrogram of `fft_size`
///
/// Every fourth of 32 divisions, counted from the bottom, labelled with the
/// spectrum bin at that height.
pub fn frequency_ticks(fft_size: usize) -> Ticks {
    let mut indices = Vec::new();
    let mut labels = Vec::new();
    for i in (0..FREQUENCY_DIVISIONS).step_by(4) {
        indices.push(FREQUENCY_DIVISIONS - i - 1);
        labels.push((i * fft_size / (2 * FREQUENCY_DIVISIONS)).to_string());
    }
    Ticks {
        indices,
        labels,
        divisions: FREQUENCY_DIVISIONS,
    }
}

/// Format `value` with `digits` significant digits
///
/// Fixed notation for exponents in `[-6, digits)`, otherwise exponential
/// notation with an explicit exponent sign (`1.0e+4`).
pub fn to_precision(value: f32, digits: usize) -> String {
    let digits = digits.max(1);
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -6 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}
