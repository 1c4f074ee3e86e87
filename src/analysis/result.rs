//! Analysis result types

use serde::{Deserialize, Serialize};

use super::metadata::AnalysisMetadata;

/// Pitch-class names for 12-slot chroma vectors with slot 0 at C
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One analysed frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFrame {
    /// Frame counter since the pipeline was created
    pub index: u64,

    /// Latest `fft_size` input samples, oldest first
    pub waveform: Vec<f32>,

    /// Power spectrum in dB, `fft_size / 2` bins
    pub spectrum: Vec<f32>,

    /// Chroma vector (linear power per slot)
    pub chroma: Vec<f32>,
}

impl AnalysisFrame {
    /// Slot holding the most energy, if any slot is positive
    ///
    /// Non-finite slots are ignored.
    pub fn dominant_chroma(&self) -> Option<usize> {
        self.chroma
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_finite() && **c > 0.0)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }
}

/// Label of chroma slot `index` out of `num_chroma`, slot 0 being C
///
/// Uses note names at 12 slots per octave. Other resolutions are labelled
/// with the nearest note name (ties go to the lower note) plus the offset in
/// cents when it is not zero, e.g. `"C+50"` for slot 1 of 24.
///
/// # Example
///
/// ```
/// use chroma_scope::analysis::result::pitch_class_label;
///
/// assert_eq!(pitch_class_label(9, 12), "A");
/// assert_eq!(pitch_class_label(1, 24), "C+50");
/// ```
pub fn pitch_class_label(index: usize, num_chroma: usize) -> String {
    if num_chroma == 0 {
        return String::new();
    }
    let cents = 1200.0 * (index % num_chroma) as f32 / num_chroma as f32;
    let semitone = (cents / 100.0 - 0.5).ceil();
    let offset = (cents - semitone * 100.0).round() as i32;
    let name = PITCH_CLASS_NAMES[semitone as usize % 12];

    if offset == 0 {
        name.to_string()
    } else {
        format!("{}{:+}", name, offset)
    }
}

/// Result of analysing a whole buffer offline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Frames in time order
    pub frames: Vec<AnalysisFrame>,

    /// Chroma averaged over all frames (finite slots only)
    pub mean_chroma: Vec<f32>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

/// Average chroma vectors slot by slot, skipping non-finite values
pub fn mean_chroma(frames: &[AnalysisFrame], num_chroma: usize) -> Vec<f32> {
    let mut sums = vec![0.0f32; num_chroma];
    let mut counts = vec![0usize; num_chroma];
    for frame in frames {
        for ((sum, count), &c) in sums.iter_mut().zip(counts.iter_mut()).zip(&frame.chroma) {
            if c.is_finite() {
                *sum += c;
                *count += 1;
            }
        }
    }
    sums.iter()
        .zip(&counts)
        .map(|(&s, &n)| if n > 0 { s / n as f32 } else { 0.0 })
        .collect()
}
