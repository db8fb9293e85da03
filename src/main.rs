//! Coffee Timer - a command-line countdown timer
//!
//! This is the main entry point for the coffee-timer application.

use std::process::ExitCode;

use clap::error::ErrorKind;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use coffee_timer::{
    config::Config,
    services::SystemClock,
    tasks::run_countdown,
    utils::install_interrupt_handler,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::try_parse_args() {
        Ok(config) => config,
        Err(err) => return report_usage(err),
    };

    // Logs go to stderr so the progress line on stdout stays intact
    tracing_subscriber::fmt()
        .with_env_filter(format!("coffee_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let settings = config.timer_settings()?;

    info!("Starting coffee-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: duration={}, seconds={}, repeat={}",
        settings.label, settings.total_seconds, settings.repeat
    );

    let cancel = CancellationToken::new();
    let listener = install_interrupt_handler(cancel.clone())?;

    let mut stdout = std::io::stdout();
    let outcome = run_countdown(&settings, &SystemClock, &cancel, &mut stdout).await;

    listener.abort();
    debug!("Timer finished: {:?}", outcome);
    Ok(())
}

/// Print clap's help or diagnostic and pick the exit status
fn report_usage(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp => {
            eprint!("{}", err.render());
            ExitCode::SUCCESS
        }
        ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            eprint!("{}", err.render());
            ExitCode::FAILURE
        }
    }
}
