//! Conversion from GraphHopper DTOs to segment results.

use serde_json::Value;

use crate::domain::{Instruction, SegmentResult};

use super::types::{ResponseInstruction, ResponsePath, RouteResponse};

/// Error during DTO to segment conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The reply contained no path with geometry
    #[error("no usable path in response")]
    NoPath,

    /// A coordinate had fewer than two components
    #[error("malformed coordinate at index {0}")]
    MalformedCoordinate(usize),
}

/// Extract the error message from a GraphHopper error body, if present.
pub fn error_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Convert the best path of a route response.
pub fn convert_route_response(response: RouteResponse) -> Result<SegmentResult, ConversionError> {
    let path = response
        .paths
        .into_iter()
        .find(|p| p.points.as_ref().is_some_and(|pts| !pts.coordinates.is_empty()))
        .ok_or(ConversionError::NoPath)?;

    convert_path(path)
}

fn convert_path(path: ResponsePath) -> Result<SegmentResult, ConversionError> {
    let coordinates = path.points.map(|p| p.coordinates).unwrap_or_default();

    let geometry_coords = coordinates
        .iter()
        .enumerate()
        .map(|(idx, c)| match c.as_slice() {
            // Drop elevation if present
            [lng, lat, ..] => Ok([*lng, *lat]),
            _ => Err(ConversionError::MalformedCoordinate(idx)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SegmentResult {
        geometry_coords,
        distance_meters: path.distance.max(0.0),
        duration_seconds: path.time as f64 / 1000.0,
        instructions: path.instructions.into_iter().map(convert_instruction).collect(),
    })
}

fn convert_instruction(raw: ResponseInstruction) -> Instruction {
    Instruction {
        text: raw.text,
        distance: raw.distance,
        sign: raw.sign,
        time: raw.time,
        street_name: raw.street_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> RouteResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn converts_first_path() {
        let response = parse(json!({
            "paths": [{
                "distance": 1520.4,
                "time": 1094000,
                "points": {
                    "type": "LineString",
                    "coordinates": [[13.4050, 52.5200], [13.4100, 52.5210, 34.5], [13.4200, 52.5250]]
                },
                "instructions": [
                    { "text": "Continue onto Unter den Linden", "distance": 800.0, "time": 576000, "sign": 0, "street_name": "Unter den Linden", "interval": [0, 1] },
                    { "text": "Arrive at destination", "distance": 0.0, "time": 0, "sign": 4, "street_name": "", "interval": [2, 2] }
                ]
            }]
        }));

        let segment = convert_route_response(response).unwrap();

        assert_eq!(
            segment.geometry_coords,
            vec![[13.4050, 52.5200], [13.4100, 52.5210], [13.4200, 52.5250]]
        );
        assert_eq!(segment.distance_meters, 1520.4);
        assert_eq!(segment.duration_seconds, 1094.0);
        assert_eq!(segment.instructions.len(), 2);
        assert_eq!(
            segment.instructions[0].street_name.as_deref(),
            Some("Unter den Linden")
        );
        assert_eq!(segment.instructions[1].sign, 4);
        assert_eq!(segment.instructions[1].street_name.as_deref(), Some(""));
    }

    #[test]
    fn empty_paths_is_no_path() {
        let response = parse(json!({ "paths": [] }));
        assert_eq!(
            convert_route_response(response).unwrap_err(),
            ConversionError::NoPath
        );
    }

    #[test]
    fn missing_paths_is_no_path() {
        let response = parse(json!({ "info": { "copyrights": ["GraphHopper"] } }));
        assert_eq!(
            convert_route_response(response).unwrap_err(),
            ConversionError::NoPath
        );
    }

    #[test]
    fn path_without_geometry_is_skipped() {
        let response = parse(json!({
            "paths": [
                { "distance": 1.0, "time": 1, "points": { "coordinates": [] } },
                { "distance": 2.0, "time": 2000, "points": { "coordinates": [[1.0, 2.0], [3.0, 4.0]] } }
            ]
        }));

        let segment = convert_route_response(response).unwrap();
        assert_eq!(segment.distance_meters, 2.0);
        assert!(segment.instructions.is_empty());
    }

    #[test]
    fn coordinates_parse_losslessly() {
        let body = r#"{ "paths": [{ "distance": 1.0, "time": 1,
            "points": { "coordinates": [[13.379700000000001, 52.5163], [13.3817, 52.5163]] } }] }"#;
        let response: RouteResponse = serde_json::from_str(body).unwrap();

        let segment = convert_route_response(response).unwrap();

        assert_eq!(segment.geometry_coords[0][0], 13.379700000000001);
    }

    #[test]
    fn malformed_coordinate() {
        let response = parse(json!({
            "paths": [{ "distance": 1.0, "time": 1, "points": { "coordinates": [[1.0, 2.0], [3.0]] } }]
        }));
        assert_eq!(
            convert_route_response(response).unwrap_err(),
            ConversionError::MalformedCoordinate(1)
        );
    }

    #[test]
    fn error_message_extraction() {
        let body = json!({ "message": "Point 0 is out of bounds", "hints": [] });
        assert_eq!(
            error_message(&body).as_deref(),
            Some("Point 0 is out of bounds")
        );
        assert_eq!(error_message(&json!({ "paths": [] })), None);
        assert_eq!(error_message(&Value::Null), None);
    }
}
