use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::SharedState;

/// Login throttle entries older than this are forgotten.
const LIMITER_MAX_AGE: Duration = Duration::from_secs(30 * 60);

/// Periodically evict expired sessions and stale login throttle entries
/// until shutdown is signalled.
pub fn spawn(state: SharedState, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    let interval = Duration::from_secs(state.config.session_sweep_secs.max(1));
    tokio::spawn(run(state, interval, shutdown))
}

async fn run(state: SharedState, interval: Duration, mut shutdown: watch::Receiver<bool>) {
    tracing::debug!("Session sweeper started");

    loop {
        if *shutdown.borrow() {
            break;
        }

        sweep(&state).await;

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.changed() => {}
        }
    }

    tracing::debug!("Session sweeper stopped");
}

pub async fn sweep(state: &SharedState) {
    match state.auth.purge_expired().await {
        Ok(0) => {}
        Ok(removed) => tracing::info!("Removed {removed} expired sessions"),
        Err(e) => tracing::error!("Failed to purge expired sessions: {e}"),
    }

    state.login_limiter.cleanup(LIMITER_MAX_AGE);
}
