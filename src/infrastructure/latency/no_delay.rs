//! Latency simulator that does not wait.

use super::service::LatencySimulator;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Completes immediately.
///
/// Used by tests, by the CLI with `--no-delay`, and when
/// `SIMULATED_LATENCY_MS=0`.
#[derive(Debug, Clone, Copy)]
pub struct NoDelay;

impl NoDelay {
    pub fn new() -> Self {
        debug!("Using NoDelay (simulated latency disabled)");
        Self
    }
}

impl Default for NoDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LatencySimulator for NoDelay {
    async fn wait(&self) {}

    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}
