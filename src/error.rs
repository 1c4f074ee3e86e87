//! Error types for the visualizer back-end

use std::fmt;

/// Errors that can occur while setting up or driving the analysis pipeline
///
/// The chroma computations themselves never fail: degenerate numeric input
/// propagates through floating-point semantics instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ScopeError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for ScopeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScopeError::InvalidInput("FFT size must be a power of two".to_string());
        assert_eq!(err.to_string(), "Invalid input: FFT size must be a power of two");

        let err = ScopeError::DecodingError("No audio tracks found".to_string());
        assert_eq!(err.to_string(), "Decoding error: No audio tracks found");
    }

    #[test]
    fn test_every_variant_is_reachable() {
        use crate::features::spectrum::validate_fft_size;
        use crate::io::decoder::decode_audio;

        assert!(matches!(validate_fft_size(1000), Err(ScopeError::InvalidInput(_))));
        assert!(matches!(
            decode_audio("/no/such/file.flac"),
            Err(ScopeError::DecodingError(_))
        ));
    }
}
