//! Chroma vector extraction
//!
//! Folds a linear-frequency power spectrum (dB per bin) into a pitch-class
//! histogram relative to a base frequency. Three variants are provided; they
//! share one signature ([`ChromaFn`](super::ChromaFn)) and differ only in
//! how a bin's energy is distributed:
//!
//! 1. [`nearest_bin_chroma`] - each bin adds its full power to one slot
//! 2. [`bin_width_weighted_chroma`] - each bin's power is scaled by the pitch
//!    width it covers
//! 3. [`pitch_scan_chroma`] - walks pitch steps and samples the nearest bin
//!
//! All three zero-fill the output first and never read the DC bin. The
//! output length is whatever the caller allocated (conventionally 12).
//!
//! # Example
//!
//! ```
//! use chroma_scope::features::chroma::extractor::nearest_bin_chroma;
//!
//! let spectrum = vec![-100.0f32; 1024];
//! let mut chroma = vec![0.0f32; 12];
//! nearest_bin_chroma(&mut chroma, &spectrum, 44100.0, 440.0);
//! assert!(chroma.iter().all(|&c| c >= 0.0));
//! ```

use super::pitch::{bin_frequency, chroma_index, chroma_step, frequency_of, round_half_up};

/// Convert a power level in dB to linear power, `10^(db / 10)`
#[inline]
pub fn db_to_power(db: f32) -> f32 {
    10f32.powf(db / 10.0)
}

/// Nearest-bin accumulation
///
/// Visits bins `1..N`; bin `i` is placed at its own frequency
/// `i * sample_rate / (2N)`, rounded to the nearest chroma-scaled pitch, and
/// adds `10^(spectrum[i] / 10)` to that slot without any width weighting.
///
/// # Arguments
///
/// * `chroma` - Output buffer, overwritten
/// * `spectrum` - Power spectrum in dB, `N` bins covering `[0, sample_rate / 2)`
/// * `sample_rate` - Sample rate in Hz
/// * `base_frequency` - Frequency mapped to chroma slot 0
pub fn nearest_bin_chroma(
    chroma: &mut [f32],
    spectrum: &[f32],
    sample_rate: f32,
    base_frequency: f32,
) {
    chroma.fill(0.0);

    let num_chroma = chroma.len();
    let num_bins = spectrum.len();

    for (i, &db) in spectrum.iter().enumerate().skip(1) {
        let frequency = bin_frequency(i, sample_rate, num_bins);
        let step = chroma_step(frequency, base_frequency, num_chroma);

        if let Some(index) = chroma_index(step, num_chroma) {
            chroma[index] += db_to_power(db);
        }
    }
}

/// Boundary-weighted accumulation
///
/// Same walk over bins `1..N` as [`nearest_bin_chroma`], but each bin's power
/// is scaled by the chroma-scaled pitch width it occupies. With `low`, `mid`
/// and `high` the rounded chroma-scaled pitches of bins `i - 1`, `i` and
/// `i + 1`, the bin spans `start = (low + mid) / 2` to `stop = (mid + high) / 2`
/// and contributes `(stop - start) * 10^(spectrum[i] / 10)` to slot `mid`.
///
/// `low` is seeded through the frequency mapping instead of the pitch
/// mapping: bin 0 gives `round(n * frequency_of(0, base)) = round(n * base)`.
/// The seed is finite and lies above every bin's pitch, so bin 1 gets a
/// negative width and pulls its slot down by `(high - n * base) / 2` times
/// its power. Every other bin gets a non-negative width; bins that round to
/// the same pitch as both neighbours get zero width.
pub fn bin_width_weighted_chroma(
    chroma: &mut [f32],
    spectrum: &[f32],
    sample_rate: f32,
    base_frequency: f32,
) {
    chroma.fill(0.0);

    let num_chroma = chroma.len();
    let num_bins = spectrum.len();
    let step_of = |bin: usize| {
        chroma_step(
            bin_frequency(bin, sample_rate, num_bins),
            base_frequency,
            num_chroma,
        )
    };

    let mut low_step = round_half_up(num_chroma as f32 * frequency_of(0.0, base_frequency));
    let mut mid_step = step_of(1);

    for (i, &db) in spectrum.iter().enumerate().skip(1) {
        let high_step = step_of(i + 1);

        let start = 0.5 * (low_step + mid_step);
        let stop = 0.5 * (mid_step + high_step);

        if let Some(index) = chroma_index(mid_step, num_chroma) {
            chroma[index] += (stop - start) * db_to_power(db);
        }

        low_step = mid_step;
        mid_step = high_step;
    }
}

/// Pitch-domain scan
///
/// Walks integer chroma-scaled pitch steps from `round(n * pitch(1 Hz))` up to
/// (excluding) `round(n * pitch(sample_rate / 2))`. Each step is converted
/// back to a frequency and mapped to the nearest bin,
/// `round(freq * 2N / sample_rate)`. Steps landing on the DC bin (or a
/// non-finite index) are skipped; the scan stops at the first step that lands
/// past the end of the spectrum.
///
/// Several steps may sample the same bin and some bins may never be sampled;
/// no normalization by visit count is applied.
pub fn pitch_scan_chroma(
    chroma: &mut [f32],
    spectrum: &[f32],
    sample_rate: f32,
    base_frequency: f32,
) {
    chroma.fill(0.0);

    let num_chroma = chroma.len();
    if num_chroma == 0 {
        return;
    }
    let num_bins = spectrum.len();

    let min_step = chroma_step(1.0, base_frequency, num_chroma);
    let max_step = chroma_step(sample_rate / 2.0, base_frequency, num_chroma);
    if !min_step.is_finite() || !max_step.is_finite() {
        return;
    }

    let bins_per_hz = (2 * num_bins) as f32 / sample_rate;

    for step in (min_step as i64)..(max_step as i64) {
        let freq = frequency_of(step as f32 / num_chroma as f32, base_frequency);
        let spec_index = round_half_up(freq * bins_per_hz);

        // Also rejects NaN
        if !(spec_index >= 1.0) {
            continue;
        }
        let Some(&db) = spectrum.get(spec_index as usize) else {
            break;
        };

        let index = step.rem_euclid(num_chroma as i64) as usize;
        chroma[index] += db_to_power(db);
    }
}
