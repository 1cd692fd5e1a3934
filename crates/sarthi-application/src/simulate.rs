//! Artificial latency for the simulated coach services.

use std::time::Duration;

/// Waits `delay`, or returns immediately for a zero delay.
pub(crate) async fn latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
