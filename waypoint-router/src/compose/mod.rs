//! Multi-segment route composition.
//!
//! Providers cap the number of points accepted per request. A long
//! waypoint chain is split into overlapping windows, routed one window at a
//! time, and the partial results are stitched back into a route that looks
//! exactly like an unsplit one.

mod aggregate;
mod segment;

pub use aggregate::aggregate;
pub use segment::{RouteWindow, segment_points};
