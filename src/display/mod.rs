//! Display-side helpers
//!
//! Numeric support for the scrolling graphs; no drawing happens here:
//! - Intensity mapping into `[0, 1]`
//! - Axis tick layout
//! - Scroll-back frame history

pub mod history;
pub mod intensity;
pub mod ticks;

pub use history::FrameHistory;
pub use intensity::{normalize_chroma, AlphaConverter, DecibelRange};
pub use ticks::{frequency_ticks, wave_ticks, Ticks};
