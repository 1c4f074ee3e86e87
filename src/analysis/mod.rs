//! Frame analysis and result modules
//!
//! Drives the features once per display frame and collects the results:
//! - Frame pipeline (live and offline)
//! - Result types
//! - Metadata

pub mod metadata;
pub mod pipeline;
pub mod result;
