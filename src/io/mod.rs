//! Audio I/O modules
//!
//! Audio decoding using Symphonia and sample ring buffering.

pub mod decoder;
pub mod sample_buffer;
