//! Interrupt handling that feeds the cancellation token

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Register interrupt handlers and cancel `token` when an interrupt arrives.
///
/// Registration happens before this returns, so an interrupt delivered
/// right after the call is never lost to the default handler.
pub fn install_interrupt_handler(token: CancellationToken) -> Result<JoinHandle<()>> {
    let interrupt = platform::Interrupt::register()?;

    Ok(tokio::spawn(async move {
        if interrupt.recv().await {
            token.cancel();
        }
    }))
}

#[cfg(unix)]
mod platform {
    use anyhow::{Context, Result};
    use futures::stream::StreamExt;
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook_tokio::Signals;

    use tracing::info;

    /// SIGINT and SIGTERM delivered through a signal-hook stream
    pub struct Interrupt {
        signals: Signals,
    }

    impl Interrupt {
        pub fn register() -> Result<Self> {
            let signals =
                Signals::new([SIGINT, SIGTERM]).context("failed to register signal handlers")?;
            Ok(Self { signals })
        }

        pub async fn recv(mut self) -> bool {
            match self.signals.next().await {
                Some(signal) => {
                    info!("Received signal: {}", signal);
                    true
                }
                None => false,
            }
        }
    }
}

#[cfg(windows)]
mod platform {
    use anyhow::{Context, Result};
    use tokio::signal::windows::{ctrl_c, CtrlC};

    use tracing::info;

    /// Console Ctrl-C events
    pub struct Interrupt {
        ctrl_c: CtrlC,
    }

    impl Interrupt {
        pub fn register() -> Result<Self> {
            let ctrl_c = ctrl_c().context("failed to register Ctrl-C handler")?;
            Ok(Self { ctrl_c })
        }

        pub async fn recv(mut self) -> bool {
            let received = self.ctrl_c.recv().await.is_some();
            if received {
                info!("Received Ctrl-C");
            }
            received
        }
    }
}
