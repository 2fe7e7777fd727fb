//! The capability contract shared by every routing backend.

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, warn};

use crate::compose::{RouteWindow, aggregate, segment_points};
use crate::domain::{
    MobilityType, Point, Profile, ProfileTable, RouteData, RouteError, RouteRequest,
    SegmentResult, TransportMode,
};
use crate::transport::TransportError;

use super::options::RouteOptions;

/// A routing backend.
///
/// Implementors supply the per-provider pieces (profile table, point limit,
/// and a single-window fetch). `build_route` composes them: callers get the
/// same result shape whether they pass two points or fifty, and never see
/// how the route was split.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Human-readable backend name, used in errors and logs.
    fn provider_name(&self) -> &'static str;

    /// How to obtain and configure an API key for this backend.
    fn api_key_instructions(&self) -> &'static str;

    fn profiles(&self) -> &ProfileTable;

    /// Largest point list the backend accepts in one request.
    fn max_points_per_request(&self) -> usize;

    /// How many window requests may be in flight at once.
    fn max_concurrent_requests(&self) -> usize {
        1
    }

    /// Route a single window with exactly one outbound request.
    ///
    /// `index` is the window's position in the route and is only used to
    /// label errors.
    async fn fetch_segment(
        &self,
        index: usize,
        window: &RouteWindow,
        profile: &Profile,
        avoid_stairs: bool,
    ) -> Result<SegmentResult, RouteError>;

    fn profile_for_mobility(&self, mobility: MobilityType, mode: TransportMode) -> Profile {
        self.profiles().resolve(mobility, mode)
    }

    /// Route from `start` to `finish` through `options.waypoints`.
    ///
    /// Any window failure fails the whole build; no partial route is
    /// returned. Outstanding window requests are dropped on failure.
    async fn build_route(
        &self,
        start: Point,
        finish: Point,
        options: &RouteOptions,
    ) -> Result<RouteData, RouteError> {
        let request = RouteRequest::new(start, finish, options.waypoints.clone());
        request.validate()?;

        let profile = options
            .profile
            .clone()
            .unwrap_or_else(|| self.profiles().default_profile());
        let points = request.points();
        let windows = segment_points(&points, self.max_points_per_request())?;

        debug!(
            provider = self.provider_name(),
            %profile,
            points = points.len(),
            windows = windows.len(),
            avoid_stairs = options.avoid_stairs,
            "building route"
        );

        let fetches: Vec<_> = windows
            .iter()
            .enumerate()
            .map(|(index, window)| self.fetch_segment(index, window, &profile, options.avoid_stairs))
            .collect();

        // `buffered` yields results in window order regardless of completion order.
        let segments: Vec<SegmentResult> = stream::iter(fetches)
            .buffered(self.max_concurrent_requests().max(1))
            .try_collect()
            .await
            .inspect_err(|e| {
                warn!(provider = self.provider_name(), error = %e, "route build failed");
            })?;

        aggregate(segments, &points)
    }
}

/// Attach provider and window context to a transport failure.
pub(crate) fn transport_failure(
    provider: &'static str,
    window: usize,
    err: TransportError,
) -> RouteError {
    match err {
        TransportError::Network(message) => RouteError::Network {
            provider,
            window,
            message,
        },
        TransportError::Timeout { .. } => RouteError::Network {
            provider,
            window,
            message: err.to_string(),
        },
        TransportError::InvalidBody {
            status,
            message,
            body,
        } => RouteError::Provider {
            provider,
            window,
            status: Some(status),
            message: format!("unreadable response ({message}): {body}"),
        },
    }
}
