//! Per-segment and final route results.

use serde::{Deserialize, Serialize};

/// A turn-by-turn instruction as supplied by the provider.
///
/// Instructions are passed through untouched; `sign` keeps the provider's
/// own maneuver code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub text: String,
    /// Metres covered by this instruction.
    pub distance: f64,
    pub sign: i32,
    /// Milliseconds spent on this instruction.
    pub time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
}

/// The routed output for one window, before merging.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentResult {
    /// `[lng, lat]` pairs in travel order.
    pub geometry_coords: Vec<[f64; 2]>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub instructions: Vec<Instruction>,
}

impl SegmentResult {
    /// Extend this segment with the one that follows it.
    ///
    /// The first coordinate of `next` is the boundary point shared with the
    /// end of `self` and is always dropped, whether or not the provider
    /// actually repeated it.
    pub fn append(&mut self, next: SegmentResult) {
        self.distance_meters += next.distance_meters;
        self.duration_seconds += next.duration_seconds;
        self.instructions.extend(next.instructions);
        self.geometry_coords
            .extend(next.geometry_coords.into_iter().skip(1));
    }
}

/// GeoJSON geometry of a merged route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<[f64; 2]> },
}

impl Geometry {
    /// `[lng, lat]` pairs in travel order.
    pub fn coordinates(&self) -> &[[f64; 2]] {
        let Geometry::LineString { coordinates } = self;
        coordinates
    }
}

/// The final, canonical route returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteData {
    pub geometry: Geometry,
    /// Metres.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    pub instructions: Vec<Instruction>,
    /// The requested points as `[lat, lng]` pairs.
    pub waypoints: Vec<[f64; 2]>,
}
