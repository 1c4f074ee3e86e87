//! Analysis metadata structures

use crate::features::chroma::ChromaMethod;
use serde::{Deserialize, Serialize};

/// Analysis metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Algorithm version
    pub algorithm_version: String,

    /// Sample rate of the analysed signal in Hz
    pub sample_rate: f32,

    /// Duration of the analysed signal in seconds
    pub duration_seconds: f32,

    /// FFT size used for the spectrum
    pub fft_size: usize,

    /// Samples advanced between frames
    pub hop_size: usize,

    /// Chroma slots per octave
    pub num_chroma: usize,

    /// Frequency mapped to chroma slot 0
    pub base_frequency: f32,

    /// Chroma method used
    pub chroma_method: ChromaMethod,

    /// Number of frames produced
    pub num_frames: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            sample_rate: 0.0,
            duration_seconds: 0.0,
            fft_size: 0,
            hop_size: 0,
            num_chroma: 0,
            base_frequency: 0.0,
            chroma_method: ChromaMethod::default(),
            num_frames: 0,
            processing_time_ms: 0.0,
        }
    }
}
