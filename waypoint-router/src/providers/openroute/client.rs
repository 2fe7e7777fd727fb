//! openrouteservice routing backend.

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::compose::RouteWindow;
use crate::domain::{Profile, ProfileTable, RouteError, SegmentResult};
use crate::providers::RouteProvider;
use crate::providers::provider::transport_failure;
use crate::transport::{
    JsonRequest, JsonTransport, ReqwestTransport, TransportConfig, TransportError,
};

use super::config::OpenRouteConfig;
use super::convert::{ConversionError, convert_directions, error_message};
use super::types::DirectionsResponse;

const PROVIDER_NAME: &str = "OpenRouteService";

const PROFILES: ProfileTable = ProfileTable {
    foot: "foot-walking",
    bike: "cycling-regular",
    car: "driving-car",
    accessible: Some("wheelchair"),
};

const API_KEY_INSTRUCTIONS: &str = "\
To use openrouteservice you need an API key:
1. Sign up at https://openrouteservice.org/dev/#/signup
2. In the dashboard, request a token (the free \"Standard\" plan is enough)
3. Export it before starting the router: export ORS_API_KEY=<your token>";

/// openrouteservice Directions API backend.
#[derive(Debug, Clone)]
pub struct OpenRouteProvider<T = ReqwestTransport> {
    transport: T,
    config: OpenRouteConfig,
}

impl OpenRouteProvider<ReqwestTransport> {
    /// Create a backend talking HTTPS with the given configuration.
    pub fn new(config: OpenRouteConfig) -> Result<Self, TransportError> {
        let transport =
            ReqwestTransport::new(TransportConfig::new().with_timeout(config.timeout_secs))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: JsonTransport> OpenRouteProvider<T> {
    /// Create a backend on top of an existing transport.
    pub fn with_transport(config: OpenRouteConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &OpenRouteConfig {
        &self.config
    }

    fn directions_request(
        &self,
        window: &RouteWindow,
        profile: &Profile,
        avoid_stairs: bool,
    ) -> JsonRequest {
        let coordinates: Vec<[f64; 2]> = window.points.iter().map(|p| p.to_lng_lat()).collect();

        let mut body = json!({
            "coordinates": coordinates,
            "instructions": true,
            "language": self.config.language,
        });

        // The wheelchair profile already excludes steps.
        if avoid_stairs && profile.as_str() == PROFILES.foot {
            body["options"] = json!({ "avoid_features": ["steps"] });
        }

        JsonRequest::post(format!(
            "{}/v2/directions/{}/geojson",
            self.config.base_url,
            profile.as_str()
        ))
        .header("Authorization", self.config.api_key.as_str())
        .header("Accept", "application/geo+json, application/json")
        .json(body)
    }
}

#[async_trait]
impl<T: JsonTransport> RouteProvider for OpenRouteProvider<T> {
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
            "requesting openrouteservice segment"
        );

        // The profile becomes a URL path segment.
        if !PROFILES.contains(profile) {
            return Err(RouteError::InvalidRequest(format!(
                "unknown openrouteservice profile: {profile}"
            )));
        }

        let request = self.directions_request(window, profile, avoid_stairs);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| transport_failure(PROVIDER_NAME, index, e))?;
        let status = response.status;

        if let Some(message) = error_message(&response.body) {
            warn!(window = index, status, %message, "openrouteservice rejected request");
            return Err(RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(status),
                message,
            });
        }

        if !response.is_success() {
            return Err(RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(status),
                message: format!("HTTP status {status}"),
            });
        }

        let reply: DirectionsResponse =
            serde_json::from_value(response.body).map_err(|e| RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(status),
                message: format!("malformed response: {e}"),
            })?;

        convert_directions(reply).map_err(|e| match e {
            ConversionError::NoRoute => RouteError::NoRouteFound {
                provider: PROVIDER_NAME,
                window: index,
            },
            ConversionError::MalformedCoordinate(_) => RouteError::Provider {
                provider: PROVIDER_NAME,
                window: index,
                status: Some(status),
                message: e.to_string(),
            },
        })
    }
}
