//! Simulated latency trait.

use async_trait::async_trait;
use std::time::Duration;

/// Asynchronous stand-in for the network round-trip of a shortening request.
///
/// The shortening flow awaits [`LatencySimulator::wait`] once per accepted
/// submission, between validation and code synthesis. Implementations must
/// always complete; there is no failure or cancellation path.
///
/// # Implementations
///
/// - [`crate::infrastructure::latency::FixedDelay`] - sleeps for a configured duration
/// - [`crate::infrastructure::latency::NoDelay`] - completes immediately (tests, CLI `--no-delay`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LatencySimulator: Send + Sync {
    /// Suspends the caller for the simulated round-trip.
    async fn wait(&self);

    /// The delay this simulator applies, for health reporting.
    fn delay(&self) -> Duration;
}
