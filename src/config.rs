//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    duration::parse_duration,
    error::TimerError,
    state::{TimerSettings, DEFAULT_MESSAGE},
};

const AFTER_HELP: &str = "\
DURATION formats:
  25m, 1h30m, 45s, 1h5m20s, 15:00, 01:15:00

Examples:
  coffee-timer 25m
  coffee-timer -m \"Time for coffee!\" 45m
  coffee-timer --once 1h";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "coffee-timer")]
#[command(about = "Count down a duration, then ring and print a timestamped message")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
#[command(args_override_self = true)]
pub struct Config {
    /// Ring once and exit instead of starting the countdown over
    #[arg(short, long)]
    pub once: bool,

    /// Message printed when the timer expires
    #[arg(short, long, default_value = DEFAULT_MESSAGE, allow_hyphen_values = true)]
    pub message: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// How long to count down, e.g. 25m, 1h30m or 15:00
    #[arg(value_name = "DURATION")]
    pub duration: String,
}

impl Config {
    /// Parse configuration from command line arguments, leaving help,
    /// version and usage errors to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Resolve the arguments into settings for the countdown loop
    pub fn timer_settings(&self) -> Result<TimerSettings, TimerError> {
        let total_seconds =
            parse_duration(&self.duration).map_err(|source| TimerError::InvalidDuration {
                input: self.duration.clone(),
                source,
            })?;

        let settings = TimerSettings::new(self.duration.clone(), total_seconds)
            .with_message(self.message.clone());
        Ok(if self.once { settings.once() } else { settings })
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
