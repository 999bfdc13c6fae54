//! Timer-backed latency simulator.

use super::service::LatencySimulator;
use async_trait::async_trait;
use std::time::Duration;
use tracing::trace;

/// Sleeps for a fixed duration on every call.
///
/// Uses the Tokio timer, so other requests keep running while a submission
/// is waiting.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Default simulated round-trip.
    pub const DEFAULT: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

#[async_trait]
impl LatencySimulator for FixedDelay {
    async fn wait(&self) {
        trace!(delay_ms = self.delay.as_millis() as u64, "Simulating latency");
        tokio::time::sleep(self.delay).await;
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_configured_delay() {
        let simulator = FixedDelay::from_millis(1000);
        let start = Instant::now();

        simulator.wait().await;

        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn test_default_is_one_second() {
        assert_eq!(FixedDelay::default().delay(), Duration::from_secs(1));
    }
}
