//! Analysis window functions

use std::f32::consts::PI;

/// Blackman window alpha
pub const BLACKMAN_ALPHA: f32 = 0.16;

/// Blackman window of `size` points
///
/// `w[n] = a0 - a1 cos(2πn/N) + a2 cos(4πn/N)` with `a0 = (1 - α) / 2`,
/// `a1 = 1/2`, `a2 = α / 2`. The denominator is `N` (periodic form), so the
/// window is suited to consecutive analysis frames.
pub fn blackman_window(size: usize) -> Vec<f32> {
    let a0 = 0.5 * (1.0 - BLACKMAN_ALPHA);
    let a1 = 0.5;
    let a2 = 0.5 * BLACKMAN_ALPHA;
    let n = size as f32;

    (0..size)
        .map(|i| {
            let phase = 2.0 * PI * i as f32 / n;
            a0 - a1 * phase.cos() + a2 * (2.0 * phase).cos()
        })
        .collect()
}
