//! Coordinates and route requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RouteError;

/// Error returned when parsing a `lat,lng` pair fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid point: {reason}")]
pub struct InvalidPoint {
    reason: &'static str,
}

/// A WGS84 coordinate.
///
/// Points have no identity beyond their coordinates. Range checks are
/// deferred to [`RouteRequest::validate`] so that providers can echo back
/// whatever the caller supplied.
///
/// # Examples
///
/// ```
/// use waypoint_router::domain::Point;
///
/// let p = Point::parse("52.5200,13.4050").unwrap();
/// assert_eq!(p.lat, 52.52);
/// assert_eq!(p.lng, 13.405);
/// assert!(p.is_valid());
///
/// assert!(Point::parse("52.52").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a `lat,lng` pair, as used on the command line.
    pub fn parse(s: &str) -> Result<Self, InvalidPoint> {
        let (lat, lng) = s.split_once(',').ok_or(InvalidPoint {
            reason: "expected `lat,lng`",
        })?;
        let lat = lat.trim().parse::<f64>().map_err(|_| InvalidPoint {
            reason: "latitude is not a number",
        })?;
        let lng = lng.trim().parse::<f64>().map_err(|_| InvalidPoint {
            reason: "longitude is not a number",
        })?;
        Ok(Self { lat, lng })
    }

    /// Whether both components are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// GeoJSON order, as sent to providers.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn to_lat_lng(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Point {
    type Err = InvalidPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An ordered route request: start, optional waypoints, finish.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: Point,
    pub finish: Point,
    pub waypoints: Vec<Point>,
}

impl RouteRequest {
    /// Create a new request.
    pub fn new(start: Point, finish: Point, waypoints: Vec<Point>) -> Self {
        Self {
            start,
            finish,
            waypoints,
        }
    }

    /// The full ordered point list `[start, ...waypoints, finish]`.
    ///
    /// Always contains at least two points.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.waypoints.len() + 2);
        points.push(self.start);
        points.extend_from_slice(&self.waypoints);
        points.push(self.finish);
        points
    }

    /// Reject requests containing coordinates no provider could route.
    pub fn validate(&self) -> Result<(), RouteError> {
        for (idx, point) in self.points().iter().enumerate() {
            if !point.is_valid() {
                return Err(RouteError::InvalidRequest(format!(
                    "point {idx} ({point}) is outside WGS84 bounds"
                )));
            }
        }
        Ok(())
    }
}
