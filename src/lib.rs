//! Coffee Timer - a command-line countdown timer
//!
//! This library parses human-friendly durations, counts them down one second
//! at a time and rings an alert when the time is up, optionally repeating
//! until interrupted.

pub mod config;
pub mod duration;
pub mod error;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use duration::{format_hhmmss, parse_duration, DurationError};
pub use error::TimerError;
pub use services::{timestamp_now, Clock, SystemClock};
pub use state::{TimerSettings, TimerState};
pub use tasks::{run_countdown, Outcome};
pub use utils::install_interrupt_handler;
