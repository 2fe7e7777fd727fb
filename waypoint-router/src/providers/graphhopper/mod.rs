//! GraphHopper Directions API backend.
//!
//! GraphHopper's free tier accepts at most 5 points per request, so
//! anything beyond a start, three waypoints and a finish is split into
//! several windows by the composition engine.
//!
//! Key characteristics of the API:
//! - Coordinates are sent and returned as `[lng, lat]` (GeoJSON order)
//!   when `points_encoded` is false
//! - `time` values are milliseconds, `distance` values are metres
//! - Errors are reported as `{ "message": ... }`, usually with a 4xx status

mod client;
mod config;
mod convert;
mod types;

pub use client::GraphHopperProvider;
pub use config::GraphHopperConfig;
