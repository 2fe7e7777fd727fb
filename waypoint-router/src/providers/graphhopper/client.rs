//! GraphHopper routing backend.
//!
//! Sends each window as a `POST /route` request and converts the best path
//! of the reply into a segment result.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::compose::RouteWindow;
use crate::domain::{Profile, ProfileTable, RouteError, SegmentResult};
use crate::providers::RouteProvider;
use crate::providers::provider::transport_failure;
use crate::transport::{
    JsonRequest, JsonTransport, ReqwestTransport, TransportConfig, TransportError,
};

use super::config::GraphHopperConfig;
use super::convert::{ConversionError, convert_route_response, error_message};
use super::types::RouteResponse;

const PROVIDER_NAME: &str = "GraphHopper";

const PROFILES: ProfileTable = ProfileTable {
    foot: "foot",
    bike: "bike",
    car: "car",
    accessible: None,
};

const API_KEY_INSTRUCTIONS: &str = "\
To use GraphHopper you need an API key:
1. Create a free account at https://graphhopper.com/dashboard/#/register
2. Open the dashboard, go to \"API Keys\" and add a new key
3. Export it before starting the router: export GRAPHHOPPER_API_KEY=<your key>
The free plan allows 5 points per request; longer routes are split automatically.";

/// GraphHopper Directions API backend.
#[derive(Debug, Clone)]
pub struct GraphHopperProvider<T = ReqwestTransport> {
    transport: T,
    config: GraphHopperConfig,
}

impl GraphHopperProvider<ReqwestTransport> {
    /// Create a backend talking HTTPS with the given configuration.
    pub fn new(config: GraphHopperConfig) -> Result<Self, TransportError> {
        let transport =
            ReqwestTransport::new(TransportConfig::new().with_timeout(config.timeout_secs))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: JsonTransport> GraphHopperProvider<T> {
    /// Create a backend on top of an existing transport.
    pub fn with_transport(config: GraphHopperConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &GraphHopperConfig {
        &self.config
    }

    fn route_request(
        &self,
        window: &RouteWindow,
        profile: &Profile,
        avoid_stairs: bool,
    ) -> JsonRequest {
        let points: Vec<[f64; 2]> = window.points.iter().map(|p| p.to_lng_lat()).collect();

        let mut body = json!({
            "points": points,
            "profile": profile.as_str(),
            "points_encoded": false,
            "instructions": true,
            "calc_points": true,
            "locale": self.config.locale,
        });

        // Custom models need the flexible (non-CH) mode.
        if avoid_stairs
            && PROFILES.is_pedestrian(profile)
            && let Value::Object(map) = &mut body
        {
            map.insert("ch.disable".to_string(), Value::Bool(true));
            map.insert(
                "custom_model".to_string(),
                json!({
                    "priority": [
                        { "if": "road_class == STEPS", "multiply_by": "0" }
                    ]
                }),
            );
        }

        JsonRequest::post(format!("{}/route", self.config.base_url))
            .query("key", self.config.api_key.as_str())
            .json(body)
    }
}

#[async_trait]
impl<T: JsonTransport> RouteProvider for GraphHopperProvider<T> {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn api_key_instructions(&self) -> &'static str {
        API_KEY_INSTRUCTIONS
    }

    fn profiles(&self) -> &ProfileTable {
        &PROFILES
    }

    fn max_points_per_request(&self) -> usize {
        self.config.max_points_per_request
    }

    fn max_concurrent_requests(&self) -> usize {
        self.config.max_concurrent
    }

    async fn fetch_segment(
        &self,
        index: usize,
        window: &RouteWindow,
        profile: &Profile,
        avoid_stairs: bool,
    ) -> Result<SegmentResult, RouteError> {
        debug!(
            window = index,
            start = window.global_start_index,
            points = window.points.len(),
            %profile,
            "requesting GraphHopper segment"
        );

        let request = self.route_request(window, profile, avoid_stairs);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| transport_failure(PROVIDER_NAME, index, e))?;

        if let Some(message) = error_message(&response.body) {
            warn!(window = index, status = response.status, %message, "GraphHopper rejected request");
            return Err(RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(response.status),
                message,
            });
        }

        if !response.is_success() {
            return Err(RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(response.status),
                message: format!("HTTP status {}", response.status),
            });
        }

        let reply: RouteResponse =
            serde_json::from_value(response.body).map_err(|e| RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(response.status),
                message: format!("malformed response: {e}"),
            })?;

        convert_route_response(reply).map_err(|e| match e {
            ConversionError::NoPath => RouteError::NoRouteFound {
                provider: PROVIDER_NAME,
                window: index,
            },
            ConversionError::MalformedCoordinate(_) => RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(response.status),
                message: e.to_string(),
            },
        })
    }
}
