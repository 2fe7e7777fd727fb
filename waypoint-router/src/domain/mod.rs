//! Domain types for the waypoint router.
//!
//! This module contains the value types shared by every provider:
//! coordinates, route requests, provider profiles and the canonical
//! route result. Types that carry invariants check them at construction
//! or through an explicit `validate` step, so the composition engine can
//! trust what it receives.

mod error;
mod point;
mod profile;
mod route;

pub use error::{RouteError, RouteErrorKind};
pub use point::{Point, RouteRequest};
pub use profile::{MobilityType, Profile, ProfileTable, TransportMode};
pub use route::{Geometry, Instruction, RouteData, SegmentResult};
