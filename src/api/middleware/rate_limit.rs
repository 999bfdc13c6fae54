//! Per-IP throttling of link creation.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Seconds before a client regains one submission.
pub const SHORTEN_REPLENISH_SECONDS: u64 = 2;

/// Submissions a client may send back to back before being throttled.
pub const SHORTEN_BURST: u32 = 20;

/// Throttles `POST /shorten` and `POST /api/shorten`.
///
/// Every submission counts, including ones the validator rejects. Pages and
/// read-only API routes are not limited.
///
/// Over-limit submissions get `429 Too Many Requests` without reaching the
/// handler. Clients are keyed by socket peer address, so the router must be
/// served with `into_make_service_with_connect_info::<SocketAddr>()`
/// (see [`crate::server::run`]).
///
/// ```rust,ignore
/// Router::new()
///     .merge(api::routes::shorten_routes().layer(rate_limit::shorten_layer()))
///     .merge(api::routes::session_routes())
///     .route_layer(session_layer);
/// ```
pub fn shorten_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let config = GovernorConfigBuilder::default()
        .per_second(SHORTEN_REPLENISH_SECONDS)
        .burst_size(SHORTEN_BURST)
        .finish()
        .expect("shortening rate and burst are non-zero");

    GovernorLayer::new(Arc::new(config))
}
