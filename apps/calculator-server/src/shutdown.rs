//! Termination signal handling.

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Resolve with the signal name once Ctrl+C or (on unix) SIGTERM arrives.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            res = signal::ctrl_c() => res.map(|()| "SIGINT"),
            _ = sigterm.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.map(|()| "ctrl-c")
    }
}

/// Cancel `cancel` once a termination signal arrives.
pub fn cancel_on_signal(cancel: CancellationToken) {
    tokio::spawn(async move {
        match wait_for_shutdown().await {
            Ok(name) => tracing::info!(signal = name, "shutdown signal received"),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "shutdown: signal handler failed, falling back to ctrl_c()"
                );
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!(error = %e, "shutdown: ctrl_c() failed");
                }
            }
        }
        cancel.cancel();
    });
}
