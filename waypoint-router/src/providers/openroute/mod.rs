//! openrouteservice Directions API backend.
//!
//! Unlike GraphHopper, openrouteservice has a dedicated `wheelchair`
//! profile, so step-free travellers get accessibility-aware routing
//! rather than plain walking. Replies are requested as GeoJSON.

mod client;
mod config;
mod convert;
mod types;

pub use client::OpenRouteProvider;
pub use config::OpenRouteConfig;
