//! Integration tests for the visualizer back-end

use chroma_scope::analysis::result::pitch_class_label;
use chroma_scope::display::{normalize_chroma, AlphaConverter, DecibelRange};
use chroma_scope::features::chroma::pitch::{bin_frequency, chroma_index, chroma_step};
use chroma_scope::io::decoder::decode_audio;
use chroma_scope::{analyze_signal, ChromaMethod, FramePipeline, ScopeConfig};
use std::path::Path;

/// Generate a sine tone
fn tone(freq: f32, sample_rate: u32, seconds: f32, amplitude: f32) -> Vec<f32> {
    let len = (seconds * sample_rate as f32) as usize;
    (0..len)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            amplitude * (2.0 * std::f32::consts::PI * freq * t).sin()
        })
        .collect()
}

/// Write 16-bit PCM WAV with `channels` identical channels
fn write_wav(path: &Path, samples: &[f32], sample_rate: u32, channels: u16) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create wav");
    for &s in samples {
        let value = (s * i16::MAX as f32) as i16;
        for _ in 0..channels {
            writer.write_sample(value).expect("write sample");
        }
    }
    writer.finalize().expect("finalize wav");
}

fn dominant(chroma: &[f32]) -> usize {
    chroma
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_finite())
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .expect("non-empty chroma")
}

fn a440_config(method: ChromaMethod) -> ScopeConfig {
    ScopeConfig {
        fft_size: 4096,
        chroma_method: method,
        ..Default::default()
    }
}

#[test]
fn test_a440_is_detected_as_a() {
    let samples = tone(440.0, 44100, 2.0, 0.5);
    for method in [ChromaMethod::NearestBin, ChromaMethod::PitchScan] {
        let result = analyze_signal(&samples, 44100, a440_config(method)).expect("analysis");
        let slot = dominant(&result.mean_chroma);
        assert_eq!(
            pitch_class_label(slot, 12),
            "A",
            "{:?} mean chroma {:?}",
            method,
            result.mean_chroma
        );
    }
}

#[test]
fn test_bin_width_weighted_frames_are_finite() {
    let samples = tone(440.0, 44100, 1.0, 0.5);
    let config = a440_config(ChromaMethod::BinWidthWeighted);
    let num_bins = config.fft_size / 2;
    let bin1_step = chroma_step(bin_frequency(1, 44100.0, num_bins), config.base_frequency, 12);
    let bin1_slot = chroma_index(bin1_step, 12).expect("finite step");

    let result = analyze_signal(&samples, 44100, config).expect("analysis");
    assert!(!result.frames.is_empty());
    for frame in &result.frames {
        assert!(frame.chroma.iter().all(|c| c.is_finite()), "{:?}", frame.chroma);
        // Only the slot holding bin 1 can go below zero
        for (i, &c) in frame.chroma.iter().enumerate() {
            assert!(i == bin1_slot || c >= 0.0, "slot {} is {}", i, c);
        }
        let display = normalize_chroma(&frame.chroma);
        assert!(display.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
    assert!(result.mean_chroma.iter().all(|c| c.is_finite()));
}

#[test]
fn test_metadata() {
    let samples = tone(220.0, 22050, 1.0, 0.25);
    let config = ScopeConfig {
        fft_size: 1024,
        hop_size: Some(512),
        ..Default::default()
    };
    let result = analyze_signal(&samples, 22050, config).expect("analysis");
    let meta = &result.metadata;
    assert_eq!(meta.fft_size, 1024);
    assert_eq!(meta.hop_size, 512);
    assert_eq!(meta.num_frames, result.frames.len());
    assert_eq!(meta.num_frames, (22050 + 511) / 512);
    assert!((meta.duration_seconds - 1.0).abs() < 1e-6);
    assert_eq!(meta.chroma_method, ChromaMethod::NearestBin);
}

#[test]
fn test_invalid_input() {
    assert!(analyze_signal(&[], 44100, ScopeConfig::default()).is_err());
    assert!(analyze_signal(&[0.0; 100], 0, ScopeConfig::default()).is_err());
}

#[test]
fn test_live_pipeline_in_small_chunks() {
    let sample_rate = 48000;
    let samples = tone(261.63, sample_rate, 1.0, 0.5);
    let config = ScopeConfig {
        fft_size: 8192,
        history_frames: 16,
        chroma_method: ChromaMethod::PitchScan,
        ..Default::default()
    };
    let mut pipeline = FramePipeline::new(config, sample_rate as f32).expect("pipeline");
    pipeline.start();

    let range = DecibelRange::new(
        pipeline.analyser().min_decibels(),
        pipeline.analyser().max_decibels(),
    );

    for chunk in samples.chunks(800) {
        pipeline.push_samples(chunk);
        let frame = pipeline.render_next_frame().expect("running");
        for &db in &frame.spectrum {
            let alpha = range.intensity(db, AlphaConverter::Linear);
            assert!((0.0..=1.0).contains(&alpha));
        }
    }

    assert_eq!(pipeline.chroma_history().len(), 16);
    let latest = pipeline.current_frame().expect("frame");
    // Base frequency is C, so a C4 tone lands on slot 0
    assert_eq!(latest.dominant_chroma(), Some(0));
}

#[test]
fn test_decode_mono_wav() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a440.wav");
    let samples = tone(440.0, 44100, 1.0, 0.5);
    write_wav(&path, &samples, 44100, 1);

    let decoded = decode_audio(&path).expect("decode");
    assert_eq!(decoded.sample_rate, 44100);
    assert_eq!(decoded.channels, 1);
    assert_eq!(decoded.samples.len(), samples.len());
    assert!((decoded.duration_seconds() - 1.0).abs() < 1e-3);
    for (a, b) in decoded.samples.iter().zip(&samples).take(1000) {
        assert!((a - b).abs() < 1e-3);
    }
}

#[test]
fn test_decode_stereo_wav_to_mono_and_analyse() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a440_stereo.wav");
    let samples = tone(440.0, 44100, 1.0, 0.5);
    write_wav(&path, &samples, 44100, 2);

    let decoded = decode_audio(&path).expect("decode");
    assert_eq!(decoded.channels, 2);
    assert_eq!(decoded.samples.len(), samples.len());

    let result = analyze_signal(
        &decoded.samples,
        decoded.sample_rate,
        a440_config(ChromaMethod::NearestBin),
    )
    .expect("analysis");
    assert_eq!(pitch_class_label(dominant(&result.mean_chroma), 12), "A");
}

#[test]
fn test_frames_serialize() {
    let samples = tone(440.0, 8000, 0.1, 0.5);
    let config = ScopeConfig {
        fft_size: 64,
        ..Default::default()
    };
    let result = analyze_signal(&samples, 8000, config).expect("analysis");
    let json = serde_json::to_string(&result.metadata).expect("serialize");
    assert!(json.contains("\"fft_size\":64"));
    assert!(json.contains("NearestBin"));
}
