//! Frequency ↔ pitch conversions shared by the chroma variants
//!
//! Pitch is measured in octaves relative to a base frequency:
//! `pitch = log2(frequency / base)`, so one unit of pitch is one octave and
//! `base` itself sits at pitch 0. Chroma-scaled pitch multiplies this by the
//! number of chroma slots, giving one unit per slot (a semitone for 12).

/// Pitch of `frequency` relative to `base_frequency`, in octaves
///
/// No guard is applied: a non-positive frequency yields `-inf` or `NaN`.
#[inline]
pub fn pitch_of(frequency: f32, base_frequency: f32) -> f32 {
    (frequency / base_frequency).log2()
}

/// Frequency in Hz of `pitch` octaves above `base_frequency`
///
/// Exact inverse of [`pitch_of`].
#[inline]
pub fn frequency_of(pitch: f32, base_frequency: f32) -> f32 {
    pitch.exp2() * base_frequency
}

/// Round half up, `floor(x + 0.5)`
///
/// Ties go toward positive infinity (so `-2.5` rounds to `-2`), unlike
/// [`f32::round`] which rounds ties away from zero.
#[inline]
pub fn round_half_up(x: f32) -> f32 {
    (x + 0.5).floor()
}

/// Rounded chroma-scaled pitch of `frequency`
#[inline]
pub fn chroma_step(frequency: f32, base_frequency: f32, num_chroma: usize) -> f32 {
    round_half_up(num_chroma as f32 * pitch_of(frequency, base_frequency))
}

/// Fold an integral chroma-scaled pitch into `[0, num_chroma)`
///
/// Uses a true mathematical modulo, so negative steps wrap to the top of
/// the range. Returns `None` when `step` is not finite (it names no slot)
/// or when `num_chroma` is zero.
#[inline]
pub fn chroma_index(step: f32, num_chroma: usize) -> Option<usize> {
    if !step.is_finite() || num_chroma == 0 {
        return None;
    }
    Some((step as i64).rem_euclid(num_chroma as i64) as usize)
}

/// Center frequency of spectrum bin `bin` for a spectrum of `num_bins` bins
///
/// `num_bins` is half the transform size, so bin `i` sits at
/// `i * sample_rate / (2 * num_bins)`.
#[inline]
pub fn bin_frequency(bin: usize, sample_rate: f32, num_bins: usize) -> f32 {
    bin as f32 * sample_rate / (2 * num_bins) as f32
}
