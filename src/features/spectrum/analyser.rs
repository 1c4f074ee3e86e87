//! Real-time spectrum analyser
//!
//! Keeps the most recent `fft_size` input samples and produces, on demand,
//! the current waveform and a smoothed power spectrum in dB, one value per
//! frequency bin (`fft_size / 2` bins covering `[0, sample_rate / 2)`).
//!
//! # Algorithm
//!
//! 1. Copy the latest `fft_size` samples and apply a Blackman window
//! 2. Forward FFT, magnitude `|X[k]| / fft_size`
//! 3. Exponential smoothing across frames:
//!    `X̂[k] = τ · X̂_prev[k] + (1 - τ) · |X[k]|`
//! 4. Convert to dB: `20 · log10(X̂[k])` (silence gives `-inf`)
//!
//! # Example
//!
//! ```
//! use chroma_scope::features::spectrum::{Analyser, AnalyserConfig};
//!
//! let mut analyser = Analyser::new(AnalyserConfig::default(), 44100.0)?;
//! analyser.push_samples(&vec![0.0f32; 4096]);
//!
//! let mut spectrum = vec![0.0f32; analyser.frequency_bin_count()];
//! analyser.get_float_frequency_data(&mut spectrum);
//! # Ok::<(), chroma_scope::ScopeError>(())
//! ```

use super::window::blackman_window;
use crate::error::ScopeError;
use crate::io::sample_buffer::SampleBuffer;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Smallest supported FFT size
pub const MIN_FFT_SIZE: usize = 32;

/// Largest supported FFT size
pub const MAX_FFT_SIZE: usize = 32768;

/// Analyser configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyserConfig {
    /// FFT size, a power of two in `[32, 32768]` (default: 2048)
    pub fft_size: usize,

    /// Lower bound of the display range in dB (default: -100.0)
    pub min_decibels: f32,

    /// Upper bound of the display range in dB (default: -30.0)
    pub max_decibels: f32,

    /// Averaging constant τ in `[0, 1]` (default: 0.8, 0 = no smoothing)
    pub smoothing_time_constant: f32,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            min_decibels: -100.0,
            max_decibels: -30.0,
            smoothing_time_constant: 0.8,
        }
    }
}

impl AnalyserConfig {
    /// Check every parameter
    pub fn validate(&self) -> Result<(), ScopeError> {
        validate_fft_size(self.fft_size)?;
        validate_decibel_range(self.min_decibels, self.max_decibels)?;
        validate_smoothing(self.smoothing_time_constant)
    }
}

/// Check that `fft_size` is a power of two in `[MIN_FFT_SIZE, MAX_FFT_SIZE]`
pub fn validate_fft_size(fft_size: usize) -> Result<(), ScopeError> {
    if !fft_size.is_power_of_two() || !(MIN_FFT_SIZE..=MAX_FFT_SIZE).contains(&fft_size) {
        return Err(ScopeError::InvalidInput(format!(
            "FFT size must be a power of two between {} and {}, got {}",
            MIN_FFT_SIZE, MAX_FFT_SIZE, fft_size
        )));
    }
    Ok(())
}

fn validate_decibel_range(min_decibels: f32, max_decibels: f32) -> Result<(), ScopeError> {
    if !(min_decibels < max_decibels) {
        return Err(ScopeError::InvalidInput(format!(
            "min_decibels ({}) must be below max_decibels ({})",
            min_decibels, max_decibels
        )));
    }
    Ok(())
}

fn validate_smoothing(smoothing_time_constant: f32) -> Result<(), ScopeError> {
    if !(0.0..=1.0).contains(&smoothing_time_constant) {
        return Err(ScopeError::InvalidInput(format!(
            "smoothing_time_constant must be in [0, 1], got {}",
            smoothing_time_constant
        )));
    }
    Ok(())
}

/// Selectable FFT sizes, `2^5 ..= 2^15`
pub fn fft_size_options() -> Vec<usize> {
    (MIN_FFT_SIZE.trailing_zeros()..=MAX_FFT_SIZE.trailing_zeros())
        .map(|exp| 1usize << exp)
        .collect()
}

/// Return `fft_size` when it is a power of two, otherwise [`MIN_FFT_SIZE`]
pub fn sanitize_fft_size(fft_size: usize) -> usize {
    if fft_size.is_power_of_two() {
        fft_size
    } else {
        MIN_FFT_SIZE
    }
}

/// Windowed-FFT spectrum analyser over a sliding sample window
pub struct Analyser {
    config: AnalyserConfig,
    sample_rate: f32,
    input: SampleBuffer,
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// Smoothed linear magnitudes, one per bin
    smoothed: Vec<f32>,
}

impl fmt::Debug for Analyser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyser")
            .field("config", &self.config)
            .field("sample_rate", &self.sample_rate)
            .field("buffered", &self.input.len())
            .finish_non_exhaustive()
    }
}

impl Analyser {
    /// Create a new analyser
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidInput` if the configuration is invalid or
    /// the sample rate is not a positive finite number.
    pub fn new(config: AnalyserConfig, sample_rate: f32) -> Result<Self, ScopeError> {
        config.validate()?;
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(ScopeError::InvalidInput(format!(
                "Invalid sample rate: {}",
                sample_rate
            )));
        }

        let fft_size = config.fft_size;
        log::debug!(
            "Creating analyser: fft_size={}, sample_rate={} Hz, smoothing={}",
            fft_size,
            sample_rate,
            config.smoothing_time_constant
        );

        Ok(Self {
            sample_rate,
            input: SampleBuffer::new(fft_size),
            window: blackman_window(fft_size),
            fft: FftPlanner::new().plan_fft_forward(fft_size),
            scratch: vec![Complex::new(0.0, 0.0); fft_size],
            smoothed: vec![0.0; fft_size / 2],
            config,
        })
    }

    /// Current configuration
    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// FFT size
    pub fn fft_size(&self) -> usize {
        self.config.fft_size
    }

    /// Number of spectrum bins, `fft_size / 2`
    pub fn frequency_bin_count(&self) -> usize {
        self.config.fft_size / 2
    }

    /// Lower bound of the display range in dB
    pub fn min_decibels(&self) -> f32 {
        self.config.min_decibels
    }

    /// Upper bound of the display range in dB
    pub fn max_decibels(&self) -> f32 {
        self.config.max_decibels
    }

    /// Feed new input samples (mono)
    pub fn push_samples(&mut self, samples: &[f32]) {
        self.input.push(samples);
    }

    /// Change the FFT size; clears buffered input and smoothing history
    pub fn set_fft_size(&mut self, fft_size: usize) -> Result<(), ScopeError> {
        validate_fft_size(fft_size)?;
        log::debug!("Changing FFT size {} -> {}", self.config.fft_size, fft_size);

        self.config.fft_size = fft_size;
        self.input.resize(fft_size);
        self.window = blackman_window(fft_size);
        self.fft = FftPlanner::new().plan_fft_forward(fft_size);
        self.scratch = vec![Complex::new(0.0, 0.0); fft_size];
        self.smoothed = vec![0.0; fft_size / 2];
        Ok(())
    }

    /// Change the smoothing constant τ
    pub fn set_smoothing_time_constant(&mut self, smoothing: f32) -> Result<(), ScopeError> {
        validate_smoothing(smoothing)?;
        self.config.smoothing_time_constant = smoothing;
        Ok(())
    }

    /// Change the display range
    pub fn set_decibel_range(
        &mut self,
        min_decibels: f32,
        max_decibels: f32,
    ) -> Result<(), ScopeError> {
        validate_decibel_range(min_decibels, max_decibels)?;
        self.config.min_decibels = min_decibels;
        self.config.max_decibels = max_decibels;
        Ok(())
    }

    /// Drop buffered input and smoothing history
    pub fn reset(&mut self) {
        self.input.clear();
        self.smoothed.fill(0.0);
    }

    /// Copy the latest input samples into `out`, oldest first
    ///
    /// Writes up to `fft_size` samples; a longer `out` is zero-padded at the
    /// front.
    pub fn get_float_time_domain_data(&self, out: &mut [f32]) {
        self.input.copy_latest(out);
    }

    /// Compute the current spectrum in dB into `out`
    ///
    /// Every call advances the smoothing state by one frame. At most
    /// `frequency_bin_count()` values are written.
    pub fn get_float_frequency_data(&mut self, out: &mut [f32]) {
        self.update_magnitudes();
        for (slot, &magnitude) in out.iter_mut().zip(&self.smoothed) {
            *slot = 20.0 * magnitude.log10();
        }
    }

    fn update_magnitudes(&mut self) {
        let fft_size = self.config.fft_size;
        let tau = self.config.smoothing_time_constant;

        let mut frame = vec![0.0f32; fft_size];
        self.input.copy_latest(&mut frame);
        for ((bin, &sample), &w) in self.scratch.iter_mut().zip(&frame).zip(&self.window) {
            *bin = Complex::new(sample * w, 0.0);
        }

        self.fft.process(&mut self.scratch);

        let scale = 1.0 / fft_size as f32;
        for (smoothed, bin) in self.smoothed.iter_mut().zip(&self.scratch) {
            let magnitude = bin.norm() * scale;
            let mut value = tau * *smoothed + (1.0 - tau) * magnitude;
            if !value.is_finite() {
                value = 0.0;
            }
            *smoothed = value;
        }

        log::trace!("Analysed frame of {} samples", fft_size);
    }
}
