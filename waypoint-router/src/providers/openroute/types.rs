//! openrouteservice GeoJSON response DTOs.

use serde::Deserialize;

/// Response from `POST /v2/directions/{profile}/geojson`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Option<LineGeometry>,
    #[serde(default)]
    pub properties: Properties,
}

/// Coordinates may carry a third elevation value when `elevation` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct LineGeometry {
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    /// Empty (`{}`) for zero-length routes.
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Summary {
    /// Metres.
    #[serde(default)]
    pub distance: f64,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
}

/// One leg between two consecutive request points.
#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    /// Maneuver code.
    #[serde(rename = "type")]
    pub kind: i32,
    pub instruction: String,
    /// `"-"` for unnamed ways.
    #[serde(default)]
    pub name: Option<String>,
}
