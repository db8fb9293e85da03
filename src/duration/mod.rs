//! Duration parsing and formatting
//!
//! This module turns user-supplied duration text into seconds and renders
//! second counts back as clock-style strings.

pub mod format;
pub mod parser;

// Re-export main functions
pub use format::format_hhmmss;
pub use parser::{parse_duration, DurationError};
