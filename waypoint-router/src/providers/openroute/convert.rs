//! Conversion from openrouteservice DTOs to segment results.

use serde_json::Value;

use crate::domain::{Instruction, SegmentResult};

use super::types::{DirectionsResponse, Feature, Step};

/// Error during DTO to segment conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The reply contained no feature with geometry
    #[error("no usable route in response")]
    NoRoute,

    /// A coordinate had fewer than two components
    #[error("malformed coordinate at index {0}")]
    MalformedCoordinate(usize),
}

/// Extract the error message from an openrouteservice error body.
///
/// The API uses both `{ "error": { "code": .., "message": .. } }` and the
/// older `{ "error": "message" }` shape.
pub fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(message) => Some(message.clone()),
        Value::Object(detail) => {
            let message = detail
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            Some(match detail.get("code").and_then(Value::as_i64) {
                Some(code) => format!("{message} (code {code})"),
                None => message.to_string(),
            })
        }
        other => Some(other.to_string()),
    }
}

/// Convert the first routed feature of a directions response.
pub fn convert_directions(response: DirectionsResponse) -> Result<SegmentResult, ConversionError> {
    let feature = response
        .features
        .into_iter()
        .find(|f| f.geometry.as_ref().is_some_and(|g| !g.coordinates.is_empty()))
        .ok_or(ConversionError::NoRoute)?;

    convert_feature(feature)
}

fn convert_feature(feature: Feature) -> Result<SegmentResult, ConversionError> {
    let coordinates = feature.geometry.map(|g| g.coordinates).unwrap_or_default();

    let geometry_coords = coordinates
        .iter()
        .enumerate()
        .map(|(idx, c)| match c.as_slice() {
            [lng, lat, ..] => Ok([*lng, *lat]),
            _ => Err(ConversionError::MalformedCoordinate(idx)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = feature.properties.summary;
    let instructions = feature
        .properties
        .segments
        .into_iter()
        .flat_map(|segment| segment.steps)
        .map(convert_step)
        .collect();

    Ok(SegmentResult {
        geometry_coords,
        distance_meters: summary.distance.max(0.0),
        duration_seconds: summary.duration.max(0.0),
        instructions,
    })
}

fn convert_step(step: Step) -> Instruction {
    Instruction {
        text: step.instruction,
        distance: step.distance,
        sign: step.kind,
        time: (step.duration * 1000.0).round() as u64,
        street_name: step.name,
    }
}
