//! Configuration parameters for the visualizer pipeline

use crate::error::ScopeError;
use crate::features::chroma::{ChromaMethod, DEFAULT_NUM_CHROMA};
use crate::features::spectrum::{validate_fft_size, AnalyserConfig};
use serde::{Deserialize, Serialize};

/// C5 (`440 * 2^(3/12)` Hz), so chroma slot 0 is the pitch class C
pub fn c_base_frequency() -> f32 {
    440.0 * 2f32.powf(3.0 / 12.0)
}

/// Pipeline configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    // Spectrum analysis
    /// FFT size, a power of two in `[32, 32768]` (default: 256)
    pub fft_size: usize,

    /// Lower bound of the spectrogram display range in dB (default: -100.0)
    pub min_decibels: f32,

    /// Upper bound of the spectrogram display range in dB (default: -30.0)
    pub max_decibels: f32,

    /// Spectrum smoothing constant in `[0, 1]` (default: 0.8)
    pub smoothing_time_constant: f32,

    // Chroma
    /// Number of chroma slots per octave (default: 12)
    pub num_chroma: usize,

    /// Frequency mapped to chroma slot 0 (default: C5, ~523.25 Hz)
    pub base_frequency: f32,

    /// Energy distribution strategy (default: NearestBin)
    pub chroma_method: ChromaMethod,

    // Display
    /// Frames kept for scroll-back (default: 256)
    pub history_frames: usize,

    /// Waveform display scale, at least 1e-4 (default: 1.0)
    pub wave_scale: f32,

    // Offline stepping
    /// Samples advanced between frames in offline analysis (default: None = fft_size)
    pub hop_size: Option<usize>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            fft_size: 256,
            min_decibels: -100.0,
            max_decibels: -30.0,
            smoothing_time_constant: 0.8,
            num_chroma: DEFAULT_NUM_CHROMA,
            base_frequency: c_base_frequency(),
            chroma_method: ChromaMethod::NearestBin,
            history_frames: 256,
            wave_scale: 1.0,
            hop_size: None,
        }
    }
}

impl ScopeConfig {
    /// Analyser settings derived from this configuration
    pub fn analyser_config(&self) -> AnalyserConfig {
        AnalyserConfig {
            fft_size: self.fft_size,
            min_decibels: self.min_decibels,
            max_decibels: self.max_decibels,
            smoothing_time_constant: self.smoothing_time_constant,
        }
    }

    /// Samples between offline frames
    pub fn effective_hop_size(&self) -> usize {
        self.hop_size.unwrap_or(self.fft_size)
    }

    /// Check every parameter
    ///
    /// The chroma computation itself tolerates any base frequency; the
    /// pipeline requires a positive finite one so frames stay meaningful.
    pub fn validate(&self) -> Result<(), ScopeError> {
        validate_fft_size(self.fft_size)?;
        self.analyser_config().validate()?;

        if self.num_chroma == 0 {
            return Err(ScopeError::InvalidInput(
                "num_chroma must be at least 1".to_string(),
            ));
        }
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            return Err(ScopeError::InvalidInput(format!(
                "base_frequency must be positive, got {}",
                self.base_frequency
            )));
        }
        if self.effective_hop_size() == 0 {
            return Err(ScopeError::InvalidInput(
                "hop_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ScopeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_hop_size(), 256);
        assert!((config.base_frequency - 523.2511).abs() < 1e-2);
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            ScopeConfig {
                fft_size: 300,
                ..Default::default()
            },
            ScopeConfig {
                num_chroma: 0,
                ..Default::default()
            },
            ScopeConfig {
                base_frequency: 0.0,
                ..Default::default()
            },
            ScopeConfig {
                hop_size: Some(0),
                ..Default::default()
            },
            ScopeConfig {
                min_decibels: 0.0,
                max_decibels: -10.0,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ScopeConfig {
            chroma_method: ChromaMethod::PitchScan,
            hop_size: Some(128),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ScopeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
