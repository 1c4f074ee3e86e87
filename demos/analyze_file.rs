//! Example: Analyze a single audio file
//!
//! Usage:
//!   cargo run --release --example analyze_file -- <file> [method] [--json]
//!
//! `method` is one of `nearest-bin` (default), `bin-width` or `pitch-scan`.

use chroma_scope::analysis::result::pitch_class_label;
use chroma_scope::io::decoder::decode_audio;
use chroma_scope::{analyze_signal, ChromaMethod, ScopeConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let path = positional
        .first()
        .ok_or("usage: analyze_file <file> [method] [--json]")?;
    let method = match positional.get(1) {
        Some(name) => ChromaMethod::from_name(name)
            .ok_or_else(|| format!("unknown chroma method: {}", name))?,
        None => ChromaMethod::default(),
    };

    let audio = decode_audio(path.as_str())?;
    let config = ScopeConfig {
        fft_size: 4096,
        chroma_method: method,
        ..Default::default()
    };
    let result = analyze_signal(&audio.samples, audio.sample_rate, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Analysis Results:");
    println!("  Duration: {:.2} s at {} Hz", audio.duration_seconds(), audio.sample_rate);
    println!("  Method: {}", method.name());
    println!("  Frames: {}", result.metadata.num_frames);
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);

    let peak = result
        .mean_chroma
        .iter()
        .cloned()
        .filter(|c| c.is_finite())
        .fold(0.0f32, f32::max);
    println!("  Mean chroma:");
    for (i, &c) in result.mean_chroma.iter().enumerate() {
        let bar_len = if peak > 0.0 { (40.0 * c / peak).round() as usize } else { 0 };
        println!(
            "    {:>6} {:>10.3e} {}",
            pitch_class_label(i, result.mean_chroma.len()),
            c,
            "#".repeat(bar_len)
        );
    }

    Ok(())
}
