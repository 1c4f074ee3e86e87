//! Per-frame analysis driver
//!
//! Owns the analyser, the chroma engine and the scroll-back histories, and
//! turns buffered input into one [`AnalysisFrame`] per display refresh. The
//! caller drives it: push captured samples as they arrive, then call
//! [`FramePipeline::render_next_frame`] once per refresh while running.
//!
//! # Example
//!
//! ```
//! use chroma_scope::analysis::pipeline::FramePipeline;
//! use chroma_scope::ScopeConfig;
//!
//! let mut pipeline = FramePipeline::new(ScopeConfig::default(), 44100.0)?;
//! pipeline.start();
//! pipeline.push_samples(&vec![0.0f32; 256]);
//! let frame = pipeline.render_next_frame().expect("running");
//! assert_eq!(frame.chroma.len(), 12);
//! # Ok::<(), chroma_scope::ScopeError>(())
//! ```

use super::result::AnalysisFrame;
use crate::config::ScopeConfig;
use crate::display::history::FrameHistory;
use crate::display::ticks::{clamp_wave_scale, frequency_ticks, wave_ticks, Ticks};
use crate::error::ScopeError;
use crate::features::chroma::{ChromaEngine, ChromaMethod};
use crate::features::spectrum::{sanitize_fft_size, Analyser};

/// Live frame pipeline
#[derive(Debug)]
pub struct FramePipeline {
    config: ScopeConfig,
    analyser: Analyser,
    engine: ChromaEngine,
    running: bool,
    frame_index: u64,
    current: Option<AnalysisFrame>,
    waveform_history: FrameHistory<Vec<f32>>,
    spectrum_history: FrameHistory<Vec<f32>>,
    chroma_history: FrameHistory<Vec<f32>>,
    wave_ticks: Ticks,
    frequency_ticks: Ticks,
}

impl FramePipeline {
    /// Create a stopped pipeline
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidInput` if the configuration or the sample
    /// rate is invalid.
    pub fn new(config: ScopeConfig, sample_rate: f32) -> Result<Self, ScopeError> {
        config.validate()?;
        let analyser = Analyser::new(config.analyser_config(), sample_rate)?;
        let engine = ChromaEngine::new(
            config.chroma_method,
            config.num_chroma,
            config.base_frequency,
        );
        let wave_scale = clamp_wave_scale(config.wave_scale);

        log::debug!(
            "Creating frame pipeline: fft_size={}, num_chroma={}, base={:.2} Hz, method={}",
            config.fft_size,
            config.num_chroma,
            config.base_frequency,
            config.chroma_method.name()
        );

        Ok(Self {
            analyser,
            engine,
            running: false,
            frame_index: 0,
            current: None,
            waveform_history: FrameHistory::new(config.history_frames),
            spectrum_history: FrameHistory::new(config.history_frames),
            chroma_history: FrameHistory::new(config.history_frames),
            wave_ticks: wave_ticks(wave_scale),
            frequency_ticks: frequency_ticks(config.fft_size),
            config: ScopeConfig {
                wave_scale,
                ..config
            },
        })
    }

    /// Start producing frames; no-op when already running
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        log::debug!("Starting frame pipeline");
        self.running = true;
    }

    /// Stop producing frames; buffered input and histories are kept
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        log::debug!("Stopping frame pipeline after {} frames", self.frame_index);
        self.running = false;
    }

    /// Whether frames are being produced
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed captured mono samples
    pub fn push_samples(&mut self, samples: &[f32]) {
        self.analyser.push_samples(samples);
    }

    /// Analyse the current input window and record the frame
    ///
    /// Returns `None` while stopped.
    pub fn render_next_frame(&mut self) -> Option<&AnalysisFrame> {
        if !self.running {
            return None;
        }

        let mut waveform = vec![0.0f32; self.analyser.fft_size()];
        let mut spectrum = vec![0.0f32; self.analyser.frequency_bin_count()];
        self.analyser.get_float_time_domain_data(&mut waveform);
        self.analyser.get_float_frequency_data(&mut spectrum);
        let chroma = self
            .engine
            .process(&spectrum, self.analyser.sample_rate())
            .to_vec();

        self.waveform_history.push(waveform.clone());
        self.spectrum_history.push(spectrum.clone());
        self.chroma_history.push(chroma.clone());

        log::trace!("Rendered frame {}", self.frame_index);

        self.current = Some(AnalysisFrame {
            index: self.frame_index,
            waveform,
            spectrum,
            chroma,
        });
        self.frame_index += 1;
        self.current.as_ref()
    }

    /// Most recently rendered frame
    pub fn current_frame(&self) -> Option<&AnalysisFrame> {
        self.current.as_ref()
    }

    /// Number of frames rendered so far
    pub fn frames_rendered(&self) -> u64 {
        self.frame_index
    }

    /// Change the FFT size
    ///
    /// Sizes that are not a power of two fall back to the minimum size.
    /// Clears the analyser state and the waveform and spectrum histories.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidInput` for power-of-two sizes outside the
    /// supported range.
    pub fn change_fft_size(&mut self, fft_size: usize) -> Result<usize, ScopeError> {
        let fft_size = sanitize_fft_size(fft_size);
        self.analyser.set_fft_size(fft_size)?;
        self.config.fft_size = fft_size;
        self.waveform_history.clear();
        self.spectrum_history.clear();
        self.frequency_ticks = frequency_ticks(fft_size);
        Ok(fft_size)
    }

    /// Change the waveform display scale, clamped to at least 1e-4
    ///
    /// Returns the scale actually applied.
    pub fn change_wave_scale(&mut self, wave_scale: f32) -> f32 {
        let wave_scale = clamp_wave_scale(wave_scale);
        self.config.wave_scale = wave_scale;
        self.wave_ticks = wave_ticks(wave_scale);
        wave_scale
    }

    /// Switch the chroma method from the next frame on
    pub fn set_chroma_method(&mut self, method: ChromaMethod) {
        log::debug!("Chroma method -> {}", method.name());
        self.config.chroma_method = method;
        self.engine.set_method(method);
    }

    /// Change the number of scroll-back frames; clears all histories
    pub fn change_history_frames(&mut self, num_frames: usize) {
        self.config.history_frames = num_frames;
        self.waveform_history.change_num_frames(num_frames);
        self.spectrum_history.change_num_frames(num_frames);
        self.chroma_history.change_num_frames(num_frames);
    }

    /// Current configuration
    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Spectrum analyser
    pub fn analyser(&self) -> &Analyser {
        &self.analyser
    }

    /// Chroma engine
    pub fn chroma_engine(&self) -> &ChromaEngine {
        &self.engine
    }

    /// Waveform scroll-back
    pub fn waveform_history(&self) -> &FrameHistory<Vec<f32>> {
        &self.waveform_history
    }

    /// Spectrogram scroll-back
    pub fn spectrum_history(&self) -> &FrameHistory<Vec<f32>> {
        &self.spectrum_history
    }

    /// Chromagram scroll-back
    pub fn chroma_history(&self) -> &FrameHistory<Vec<f32>> {
        &self.chroma_history
    }

    /// Amplitude axis ticks for the current wave scale
    pub fn wave_ticks(&self) -> &Ticks {
        &self.wave_ticks
    }

    /// Frequency axis ticks for the current FFT size
    pub fn frequency_ticks(&self) -> &Ticks {
        &self.frequency_ticks
    }
}
