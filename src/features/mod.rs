//! Feature extraction modules
//!
//! This module contains the per-frame signal features:
//! - Spectrum analysis (windowed FFT, dB power spectrum)
//! - Chroma extraction (three pitch-class folding variants)

pub mod chroma;
pub mod spectrum;
