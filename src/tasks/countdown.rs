//! Countdown loop: tick, alert, repeat

use std::io::Write;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    duration::format_hhmmss,
    services::{format_timestamp, ring, sleep_unless_cancelled, Clock, ALERT_PULSES},
    state::{TimerSettings, TimerState},
};

/// Interval between progress updates
pub const TICK: Duration = Duration::from_secs(1);

/// How a timer run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested cycle finished
    Completed { cycles: u32 },
    /// The run was interrupted; `cycles` had already finished
    Cancelled { cycles: u32 },
}

impl Outcome {
    /// Number of countdowns that reached zero and alerted
    pub fn cycles(&self) -> u32 {
        match self {
            Outcome::Completed { cycles } | Outcome::Cancelled { cycles } => *cycles,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled { .. })
    }
}

/// Run countdown cycles until one completes with repeat disabled, or until
/// `cancel` fires.
///
/// Progress is written to `out` in place, one line per cycle, followed by the
/// completion line and the alert burst. Write errors are ignored.
pub async fn run_countdown<C: Clock, W: Write>(
    settings: &TimerSettings,
    clock: &C,
    cancel: &CancellationToken,
    out: &mut W,
) -> Outcome {
    info!(
        "Starting countdown of {}s (repeat={})",
        settings.total_seconds, settings.repeat
    );

    let mut cycles = 0;
    loop {
        let _ = writeln!(out, "{}", settings.banner());
        let _ = out.flush();
        debug!("Cycle {} started", cycles + 1);

        if !count_down(settings.total_seconds, clock, cancel, out).await {
            break;
        }

        let stamp = format_timestamp(clock.now());
        let _ = writeln!(out, "\r✅  {}  ({})", settings.message, stamp);
        let _ = out.flush();
        info!("Timer expired at {}", stamp);

        ring(ALERT_PULSES, clock, cancel, out).await;
        cycles += 1;

        if !settings.repeat || cancel.is_cancelled() {
            break;
        }
    }

    if cancel.is_cancelled() {
        let _ = write!(out, "\nCancelled. Bye!\n");
        let _ = out.flush();
        info!("Countdown cancelled after {} completed cycles", cycles);
        return Outcome::Cancelled { cycles };
    }

    Outcome::Completed { cycles }
}

/// Count one cycle down to zero. Returns `false` if cancelled first.
async fn count_down<C: Clock, W: Write>(
    total_seconds: u64,
    clock: &C,
    cancel: &CancellationToken,
    out: &mut W,
) -> bool {
    let mut state = TimerState::active(total_seconds);

    while let Some(remaining) = state.remaining_seconds() {
        if cancel.is_cancelled() {
            state.finish();
            return false;
        }

        let _ = write!(out, "\r⏳  {} remaining ", format_hhmmss(remaining));
        let _ = out.flush();

        if state.is_expired() {
            state.finish();
            return true;
        }

        // an early wake is caught by the check at the top of the loop
        sleep_unless_cancelled(clock, TICK, cancel).await;
        state.tick();
    }

    !cancel.is_cancelled()
}
