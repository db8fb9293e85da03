//! Completion alert: bell pulses and timestamps

use std::io::Write;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::clock::{sleep_unless_cancelled, Clock, SystemClock};

/// Pulses rung when a countdown completes
pub const ALERT_PULSES: u32 = 3;

/// Pause after each pulse
pub const PULSE_GAP: Duration = Duration::from_millis(250);

const BELL: &[u8] = b"\x07";

/// Ring `times` bell pulses, stopping early once `cancel` fires.
///
/// A pulse that has started is always completed. Write errors are ignored.
/// Returns the number of pulses emitted.
pub async fn ring<C: Clock, W: Write>(
    times: u32,
    clock: &C,
    cancel: &CancellationToken,
    out: &mut W,
) -> u32 {
    let mut emitted = 0;
    for _ in 0..times {
        if cancel.is_cancelled() {
            debug!("Alert burst cut short after {} pulses", emitted);
            break;
        }
        let _ = out.write_all(BELL);
        let _ = out.flush();
        emitted += 1;
        sleep_unless_cancelled(clock, PULSE_GAP, cancel).await;
    }
    emitted
}

/// Render a local time as `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`
pub fn timestamp_now() -> String {
    format_timestamp(SystemClock.now())
}
