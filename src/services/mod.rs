//! Side-effecting services module
//!
//! This module contains the clock the countdown sleeps on and the alert
//! emitter that rings when a cycle completes.

pub mod alert;
pub mod clock;

// Re-export main functions
pub use alert::{format_timestamp, ring, timestamp_now, ALERT_PULSES, PULSE_GAP};
pub use clock::{sleep_unless_cancelled, Clock, SystemClock};
