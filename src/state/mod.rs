//! State management module
//!
//! This module contains the values the countdown loop reads and mutates.

pub mod settings;
pub mod timer_state;

// Re-export main types
pub use settings::{TimerSettings, DEFAULT_MESSAGE};
pub use timer_state::TimerState;
