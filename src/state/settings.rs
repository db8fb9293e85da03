//! Immutable inputs of a timer run

/// Message printed when no `--message` is given
pub const DEFAULT_MESSAGE: &str = "Time for coffee!";

/// Everything the countdown loop needs to know about a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSettings {
    /// Duration exactly as the user typed it, echoed in the banner
    pub label: String,
    /// Parsed duration of one countdown cycle
    pub total_seconds: u64,
    /// Text printed next to the timestamp when a cycle completes
    pub message: String,
    /// Start a fresh cycle after every alert
    pub repeat: bool,
}

impl TimerSettings {
    /// Create settings for a repeating timer with the default message
    pub fn new(label: impl Into<String>, total_seconds: u64) -> Self {
        Self {
            label: label.into(),
            total_seconds,
            message: DEFAULT_MESSAGE.to_string(),
            repeat: true,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn once(mut self) -> Self {
        self.repeat = false;
        self
    }

    /// Banner printed at the start of every cycle
    pub fn banner(&self) -> String {
        format!(
            "Starting coffee timer: {} ({} seconds)",
            self.label, self.total_seconds
        )
    }
}
