//! Mobility preferences and provider routing profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the traveller moves, as recorded in their user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityType {
    Standard,
    Wheelchair,
    /// Pushing a stroller or pram.
    Stroller,
    #[serde(other)]
    Unknown,
}

impl MobilityType {
    /// Whether routes for this traveller must avoid steps.
    pub fn requires_step_free(self) -> bool {
        matches!(self, MobilityType::Wheelchair | MobilityType::Stroller)
    }
}

impl From<&str> for MobilityType {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "none" | "default" => MobilityType::Standard,
            "wheelchair" => MobilityType::Wheelchair,
            "stroller" | "pram" | "pushchair" => MobilityType::Stroller,
            _ => MobilityType::Unknown,
        }
    }
}

/// Preferred means of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walking,
    Cycling,
    CarTaxi,
    PublicTransit,
    #[serde(other)]
    Unknown,
}

impl From<&str> for TransportMode {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "walking" | "walk" | "foot" => TransportMode::Walking,
            "cycling" | "bike" | "bicycle" => TransportMode::Cycling,
            "car_taxi" | "car" | "taxi" => TransportMode::CarTaxi,
            "public_transit" | "transit" | "public_transport" => TransportMode::PublicTransit,
            _ => TransportMode::Unknown,
        }
    }
}

/// A provider-specific routing profile identifier, e.g. `"foot"` or
/// `"cycling-regular"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(String);

impl Profile {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Profile {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The profiles a provider offers for each routing mode.
///
/// Resolution is total: anything unrecognised falls back to `foot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTable {
    pub foot: &'static str,
    pub bike: &'static str,
    pub car: &'static str,
    /// Step-free profile, if the provider has one.
    pub accessible: Option<&'static str>,
}

impl ProfileTable {
    /// Map a traveller's preferences to one of this provider's profiles.
    ///
    /// Step-free mobility wins over the transport mode. Public transit is
    /// not routed by providers, so it degrades to walking.
    pub fn resolve(&self, mobility: MobilityType, mode: TransportMode) -> Profile {
        if mobility.requires_step_free() {
            return Profile::new(self.accessible.unwrap_or(self.foot));
        }

        let id = match mode {
            TransportMode::Walking | TransportMode::PublicTransit => self.foot,
            TransportMode::Cycling => self.bike,
            TransportMode::CarTaxi => self.car,
            TransportMode::Unknown => self.foot,
        };
        Profile::new(id)
    }

    /// The profile used when a request names none.
    pub fn default_profile(&self) -> Profile {
        Profile::new(self.foot)
    }

    /// Whether `profile` is one of the walking-class profiles in this table.
    pub fn is_pedestrian(&self, profile: &Profile) -> bool {
        profile.as_str() == self.foot || self.accessible == Some(profile.as_str())
    }

    /// Whether `profile` is listed in this table.
    pub fn contains(&self, profile: &Profile) -> bool {
        let id = profile.as_str();
        id == self.bike || id == self.car || self.is_pedestrian(profile)
    }
}
