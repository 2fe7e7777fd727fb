//! Per-request routing options.

use crate::domain::{MobilityType, Point, Profile, TransportMode};

use super::RouteProvider;

/// Options for [`RouteProvider::build_route`]. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteOptions {
    /// Provider profile; `None` means the provider's walking profile.
    pub profile: Option<Profile>,
    /// Ask for step-free paths where the provider supports it.
    pub avoid_stairs: bool,
    /// Intermediate points, in travel order.
    pub waypoints: Vec<Point>,
}

impl RouteOptions {
    /// Options matching a traveller's profile on the given provider.
    ///
    /// Step-free mobility always sets `avoid_stairs`, even when the provider
    /// has no dedicated accessibility profile and walking is used instead.
    pub fn for_mobility<P: RouteProvider + ?Sized>(
        provider: &P,
        mobility: MobilityType,
        mode: TransportMode,
    ) -> Self {
        Self {
            profile: Some(provider.profile_for_mobility(mobility, mode)),
            avoid_stairs: mobility.requires_step_free(),
            waypoints: Vec::new(),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn avoiding_stairs(mut self, avoid: bool) -> Self {
        self.avoid_stairs = avoid;
        self
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Point>) -> Self {
        self.waypoints = waypoints;
        self
    }
}
