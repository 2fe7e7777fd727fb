use std::convert::Infallible;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use waypoint_router::domain::{MobilityType, Point, TransportMode};
use waypoint_router::providers::{
    GraphHopperConfig, GraphHopperProvider, OpenRouteConfig, OpenRouteProvider, RouteOptions,
    RouteProvider,
};
use waypoint_router::transport::TransportError;

#[derive(Parser, Debug)]
#[command(name = "waypoint-router", version)]
#[command(about = "Route through a chain of points and print the route as JSON", long_about = None)]
struct Cli {
    /// Routing backend
    #[arg(long, env = "ROUTING_PROVIDER", value_enum, ignore_case = true, default_value_t = ProviderChoice::Graphhopper)]
    provider: ProviderChoice,

    /// GraphHopper API key
    #[arg(long, env = "GRAPHHOPPER_API_KEY", hide_env_values = true)]
    graphhopper_api_key: Option<String>,

    /// openrouteservice API key
    #[arg(long, env = "ORS_API_KEY", hide_env_values = true)]
    ors_api_key: Option<String>,

    /// Traveller mobility: standard, wheelchair or stroller
    #[arg(long, env = "ROUTE_MOBILITY", default_value = "standard", value_parser = parse_mobility)]
    mobility: MobilityType,

    /// Transport mode: walking, cycling, car_taxi or public_transit
    #[arg(long, env = "ROUTE_MODE", default_value = "walking", value_parser = parse_mode)]
    mode: TransportMode,

    /// Points as `lat,lng`, start first and finish last. Options go before
    /// the points.
    #[arg(value_name = "LAT,LNG", num_args = 2.., required = true, allow_hyphen_values = true)]
    points: Vec<Point>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProviderChoice {
    #[value(alias = "gh")]
    Graphhopper,
    #[value(alias = "ors", alias = "openrouteservice")]
    Openroute,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    MissingApiKey(&'static str),

    #[error("failed to create HTTP client: {0}")]
    Transport(#[from] TransportError),
}

fn parse_mobility(s: &str) -> Result<MobilityType, Infallible> {
    Ok(MobilityType::from(s))
}

fn parse_mode(s: &str) -> Result<TransportMode, Infallible> {
    Ok(TransportMode::from(s))
}

fn non_empty(key: &Option<String>) -> Option<&str> {
    key.as_deref().map(str::trim).filter(|k| !k.is_empty())
}

/// Build the selected backend, or explain how to get its key.
fn build_provider(cli: &Cli) -> Result<Box<dyn RouteProvider>, CliError> {
    match cli.provider {
        ProviderChoice::Graphhopper => {
            let key = non_empty(&cli.graphhopper_api_key).unwrap_or_default();
            let provider = GraphHopperProvider::new(GraphHopperConfig::new(key))?;
            if key.is_empty() {
                return Err(CliError::MissingApiKey(provider.api_key_instructions()));
            }
            Ok(Box::new(provider))
        }
        ProviderChoice::Openroute => {
            let key = non_empty(&cli.ors_api_key).unwrap_or_default();
            let provider = OpenRouteProvider::new(OpenRouteConfig::new(key))?;
            if key.is_empty() {
                return Err(CliError::MissingApiKey(provider.api_key_instructions()));
            }
            Ok(Box::new(provider))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let provider = match build_provider(&cli) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (start, rest) = match cli.points.split_first() {
        Some(split) => split,
        None => return ExitCode::from(2),
    };
    let (finish, waypoints) = match rest.split_last() {
        Some(split) => split,
        None => return ExitCode::from(2),
    };

    let options = RouteOptions::for_mobility(provider.as_ref(), cli.mobility, cli.mode)
        .with_waypoints(waypoints.to_vec());

    let route = match provider.build_route(*start, *finish, &options).await {
        Ok(route) => route,
        Err(e) => {
            eprintln!("Routing failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&route) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize route: {e}");
            ExitCode::FAILURE
        }
    }
}
