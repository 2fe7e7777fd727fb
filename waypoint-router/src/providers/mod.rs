//! Routing backends.
//!
//! Every backend implements [`RouteProvider`]. Callers pick one at
//! construction time and use it through the trait; the composition engine
//! in the provided `build_route` method is shared by all of them.

mod graphhopper;
mod openroute;
mod options;
mod provider;

pub use graphhopper::{GraphHopperConfig, GraphHopperProvider};
pub use openroute::{OpenRouteConfig, OpenRouteProvider};
pub use options::RouteOptions;
pub use provider::RouteProvider;
