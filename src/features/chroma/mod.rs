//! Chroma extraction modules
//!
//! Fold a power spectrum into a pitch-class distribution:
//! - Frequency ↔ pitch conversions
//! - Three accumulation variants
//! - A reusable engine that owns the output buffer

pub mod extractor;
pub mod pitch;

use serde::{Deserialize, Serialize};

/// Shared signature of the chroma variants:
/// `(chroma_out, spectrum_db, sample_rate, base_frequency)`
pub type ChromaFn = fn(&mut [f32], &[f32], f32, f32);

/// Conventional chroma resolution (semitones per octave)
pub const DEFAULT_NUM_CHROMA: usize = 12;

/// Strategy used to distribute spectral energy over chroma slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChromaMethod {
    /// Every bin adds its full power to the slot of its own frequency
    #[default]
    NearestBin,
    /// Every bin's power is scaled by the pitch width it spans
    BinWidthWeighted,
    /// Integer pitch steps sample the nearest spectrum bin
    PitchScan,
}

impl ChromaMethod {
    /// All methods, in declaration order
    pub const ALL: [ChromaMethod; 3] = [
        ChromaMethod::NearestBin,
        ChromaMethod::BinWidthWeighted,
        ChromaMethod::PitchScan,
    ];

    /// The function implementing this method
    pub fn function(self) -> ChromaFn {
        match self {
            ChromaMethod::NearestBin => extractor::nearest_bin_chroma,
            ChromaMethod::BinWidthWeighted => extractor::bin_width_weighted_chroma,
            ChromaMethod::PitchScan => extractor::pitch_scan_chroma,
        }
    }

    /// Compute a chroma vector into `chroma` with this method
    ///
    /// `chroma` is zero-filled first; its length sets the resolution.
    pub fn compute(
        self,
        chroma: &mut [f32],
        spectrum: &[f32],
        sample_rate: f32,
        base_frequency: f32,
    ) {
        (self.function())(chroma, spectrum, sample_rate, base_frequency)
    }

    /// Short identifier, e.g. for command-line selection
    pub fn name(self) -> &'static str {
        match self {
            ChromaMethod::NearestBin => "nearest-bin",
            ChromaMethod::BinWidthWeighted => "bin-width",
            ChromaMethod::PitchScan => "pitch-scan",
        }
    }

    /// Parse a name produced by [`ChromaMethod::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

/// Chroma engine with a caller-sized output buffer reused across frames
///
/// Holds no state besides its configuration and the output buffer, which is
/// fully overwritten on every [`ChromaEngine::process`] call.
#[derive(Debug, Clone)]
pub struct ChromaEngine {
    method: ChromaMethod,
    base_frequency: f32,
    chroma: Vec<f32>,
}

impl ChromaEngine {
    /// Create an engine producing `num_chroma` slots relative to `base_frequency`
    pub fn new(method: ChromaMethod, num_chroma: usize, base_frequency: f32) -> Self {
        Self {
            method,
            base_frequency,
            chroma: vec![0.0; num_chroma],
        }
    }

    /// Compute the chroma vector of one spectrum frame
    ///
    /// # Arguments
    ///
    /// * `spectrum` - Power spectrum in dB (`fft_size / 2` bins)
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Returns
    ///
    /// The engine's output buffer, valid until the next call
    pub fn process(&mut self, spectrum: &[f32], sample_rate: f32) -> &[f32] {
        self.method
            .compute(&mut self.chroma, spectrum, sample_rate, self.base_frequency);
        &self.chroma
    }

    /// Last computed chroma vector
    pub fn chroma(&self) -> &[f32] {
        &self.chroma
    }

    /// Number of chroma slots
    pub fn num_chroma(&self) -> usize {
        self.chroma.len()
    }

    /// Active method
    pub fn method(&self) -> ChromaMethod {
        self.method
    }

    /// Switch method; takes effect on the next frame
    pub fn set_method(&mut self, method: ChromaMethod) {
        self.method = method;
    }

    /// Frequency mapped to slot 0
    pub fn base_frequency(&self) -> f32 {
        self.base_frequency
    }

    /// Change the frequency mapped to slot 0
    pub fn set_base_frequency(&mut self, base_frequency: f32) {
        self.base_frequency = base_frequency;
    }

    /// Change the resolution, reallocating (and clearing) the output buffer
    pub fn set_num_chroma(&mut self, num_chroma: usize) {
        self.chroma = vec![0.0; num_chroma];
    }
}
