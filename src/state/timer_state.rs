//! Timer state structure and management

/// Countdown progress for a single cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub active: bool,
    /// `None` once the cycle has finished or was stopped
    pub remaining_seconds: Option<u64>,
}

impl TimerState {
    /// Create an active timer state with remaining seconds
    pub fn active(remaining_seconds: u64) -> Self {
        Self {
            active: true,
            remaining_seconds: Some(remaining_seconds),
        }
    }

    /// Create an inactive timer state
    pub fn inactive() -> Self {
        Self {
            active: false,
            remaining_seconds: None,
        }
    }

    /// Get remaining seconds if timer is active
    pub fn remaining_seconds(&self) -> Option<u64> {
        if self.active {
            self.remaining_seconds
        } else {
            None
        }
    }

    /// True when the countdown has reached zero but has not been finished yet
    pub fn is_expired(&self) -> bool {
        self.remaining_seconds() == Some(0)
    }

    /// Count one second down. Has no effect at zero or when inactive.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        if let Some(remaining) = self.remaining_seconds.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
    }

    /// Mark the cycle as done
    pub fn finish(&mut self) {
        *self = Self::inactive();
    }
}
