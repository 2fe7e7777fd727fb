//! GraphHopper API response DTOs.
//!
//! Only the fields the router needs are modelled. GraphHopper omits
//! `instructions` when they were not requested and returns an empty
//! `street_name` for unnamed ways.

use serde::Deserialize;

/// Response from `POST /route`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// Alternative paths; the first is the best.
    #[serde(default)]
    pub paths: Vec<ResponsePath>,
}

/// One routed path.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePath {
    /// Metres.
    pub distance: f64,

    /// Milliseconds.
    pub time: u64,

    /// Unencoded geometry; absent when `calc_points` is false.
    pub points: Option<PathPoints>,

    #[serde(default)]
    pub instructions: Vec<ResponseInstruction>,
}

/// GeoJSON-style line. Coordinates may carry a third elevation value.
#[derive(Debug, Clone, Deserialize)]
pub struct PathPoints {
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseInstruction {
    pub text: String,
    pub distance: f64,
    pub time: u64,
    pub sign: i32,
    #[serde(default)]
    pub street_name: Option<String>,
}
