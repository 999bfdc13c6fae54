//! Simulated request latency.
//!
//! Provides a [`LatencySimulator`] trait with two implementations:
//! - [`FixedDelay`] - Tokio sleep for a configured duration
//! - [`NoDelay`] - Immediate completion

mod fixed_delay;
mod no_delay;
mod service;

pub use fixed_delay::FixedDelay;
pub use no_delay::NoDelay;
pub use service::LatencySimulator;

#[cfg(test)]
pub use service::MockLatencySimulator;

use std::sync::Arc;
use std::time::Duration;

/// Picks the simulator for a configured delay: [`NoDelay`] for zero,
/// [`FixedDelay`] otherwise.
pub fn from_duration(delay: Duration) -> Arc<dyn LatencySimulator> {
    if delay.is_zero() {
        Arc::new(NoDelay::new())
    } else {
        Arc::new(FixedDelay::new(delay))
    }
}
