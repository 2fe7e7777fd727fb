//! Multi-segment route builder.
//!
//! Requests walking, cycling and driving routes from third-party routing
//! services. Providers limit how many points one request may carry, so long
//! waypoint chains are split into overlapping windows, routed window by
//! window, and stitched back into a single continuous route.

pub mod compose;
pub mod domain;
pub mod providers;
pub mod transport;
