//! Foreground tasks module
//!
//! This module contains the countdown loop that drives a timer run.

pub mod countdown;

// Re-export main functions
pub use countdown::{run_countdown, Outcome, TICK};
