//! Spectrum analysis modules
//!
//! Produce the per-frame inputs of the chroma engine:
//! - Blackman analysis window
//! - Sliding-window FFT analyser with smoothing and dB output

pub mod analyser;
pub mod window;

pub use analyser::{
    fft_size_options, sanitize_fft_size, validate_fft_size, Analyser, AnalyserConfig,
    MAX_FFT_SIZE, MIN_FFT_SIZE,
};
