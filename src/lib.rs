//! # Chroma Scope
//!
//! Back-end of a real-time audio visualizer: turns a live (or decoded) audio
//! stream into per-frame waveforms, power spectra and chroma vectors, ready
//! for scrolling waveform, spectrogram and chromagram displays.
//!
//! ## Features
//!
//! - **Chroma vectors**: three strategies folding a dB power spectrum into an
//!   N-slot pitch-class histogram relative to a base frequency
//! - **Spectrum analysis**: sliding-window Blackman FFT with smoothing, dB output
//! - **Display support**: intensity mapping, axis ticks, scroll-back history
//! - **Decoding**: Symphonia-based file decoding for offline analysis
//!
//! ## Quick Start
//!
//! ```
//! use chroma_scope::{ChromaMethod, DEFAULT_NUM_CHROMA};
//!
//! // One analysis frame: 1024 bins in dB at 44.1 kHz
//! let spectrum = vec![-90.0f32; 1024];
//! let mut chroma = vec![0.0f32; DEFAULT_NUM_CHROMA];
//!
//! ChromaMethod::PitchScan.compute(&mut chroma, &spectrum, 44100.0, 261.63);
//! assert!(chroma.iter().all(|&c| c >= 0.0));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Samples → Analyser (window, FFT, smoothing, dB) → ChromaEngine → Frame → Histories
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::pipeline::FramePipeline;
pub use analysis::result::{AnalysisFrame, AnalysisResult};
pub use analysis::metadata::AnalysisMetadata;
pub use config::ScopeConfig;
pub use error::ScopeError;
pub use features::chroma::{ChromaEngine, ChromaFn, ChromaMethod, DEFAULT_NUM_CHROMA};
pub use features::chroma::extractor::{
    bin_width_weighted_chroma, nearest_bin_chroma, pitch_scan_chroma,
};
pub use features::chroma::pitch::{frequency_of, pitch_of};

/// Analyse a whole signal offline
///
/// Feeds the signal to a [`FramePipeline`] in hops of
/// `config.hop_size` samples (default: one FFT size) and renders one frame
/// after each hop.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Pipeline configuration
///
/// # Errors
///
/// Returns `ScopeError::InvalidInput` for empty input, a zero sample rate or
/// an invalid configuration.
///
/// # Example
///
/// ```
/// use chroma_scope::{analyze_signal, ScopeConfig};
///
/// let samples = vec![0.0f32; 44100];
/// let result = analyze_signal(&samples, 44100, ScopeConfig::default())?;
/// assert_eq!(result.mean_chroma.len(), 12);
/// # Ok::<(), chroma_scope::ScopeError>(())
/// ```
pub fn analyze_signal(
    samples: &[f32],
    sample_rate: u32,
    config: ScopeConfig,
) -> Result<AnalysisResult, ScopeError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!("Starting signal analysis: {} samples at {} Hz", samples.len(), sample_rate);

    if samples.is_empty() {
        return Err(ScopeError::InvalidInput("Empty audio samples".to_string()));
    }

    if sample_rate == 0 {
        return Err(ScopeError::InvalidInput("Invalid sample rate".to_string()));
    }

    let hop_size = config.effective_hop_size();
    let mut pipeline = FramePipeline::new(config, sample_rate as f32)?;
    pipeline.start();

    let mut frames = Vec::with_capacity(samples.len() / hop_size.max(1) + 1);
    for hop in samples.chunks(hop_size) {
        pipeline.push_samples(hop);
        if let Some(frame) = pipeline.render_next_frame() {
            frames.push(frame.clone());
        }
    }
    pipeline.stop();

    let config = pipeline.config();
    let mean_chroma = analysis::result::mean_chroma(&frames, config.num_chroma);
    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Analysed {} frames in {:.2} ms",
        frames.len(),
        processing_time_ms
    );

    let metadata = AnalysisMetadata {
        sample_rate: sample_rate as f32,
        duration_seconds: samples.len() as f32 / sample_rate as f32,
        fft_size: config.fft_size,
        hop_size,
        num_chroma: config.num_chroma,
        base_frequency: config.base_frequency,
        chroma_method: config.chroma_method,
        num_frames: frames.len(),
        processing_time_ms,
        ..Default::default()
    };

    Ok(AnalysisResult {
        frames,
        mean_chroma,
        metadata,
    })
}
