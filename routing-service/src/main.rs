use std::process::ExitCode;

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use routing_service::domain::{Itinerary, RouteSpecification, UnLocode};
use routing_service::pathfinder::{
    MockPathfinder, PathfinderClient, PathfinderConfig, TransitPathProvider,
};
use routing_service::repository::{
    InMemoryLocationRepository, InMemoryVoyageRepository, LocationRepository, Seed,
};
use routing_service::routing::{ExternalRoutingService, RoutingService, parse_timestamp};

/// Seed file used when `ROUTING_SEED` is not set.
const DEFAULT_SEED_PATH: &str = "data/seed.json";

/// Deadline used when none is given on the command line.
const DEFAULT_DEADLINE_DAYS: i64 = 90;

const USAGE: &str = "usage: routing-service ORIGIN DESTINATION [ARRIVAL_DEADLINE]";

type BoxError = Box<dyn std::error::Error>;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("routing_service=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BoxError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (origin, destination) = match args.as_slice() {
        [origin, destination, ..] => (UnLocode::parse(origin)?, UnLocode::parse(destination)?),
        _ => return Err(USAGE.into()),
    };
    let deadline: DateTime<Utc> = match args.get(2) {
        Some(s) => parse_timestamp(s)?,
        None => Utc::now() + Duration::days(DEFAULT_DEADLINE_DAYS),
    };

    // Load locations and voyages
    let seed_path =
        std::env::var("ROUTING_SEED").unwrap_or_else(|_| DEFAULT_SEED_PATH.to_string());
    let (locations, voyages) = Seed::load(&seed_path)?.into_repositories()?;
    info!(path = %seed_path, locations = locations.len(), voyages = voyages.len(), "loaded seed data");

    let spec = RouteSpecification::new(
        locations
            .find(&origin)
            .ok_or_else(|| format!("unknown origin {origin}"))?,
        locations
            .find(&destination)
            .ok_or_else(|| format!("unknown destination {destination}"))?,
        deadline,
    )?;

    // Mock data takes precedence so the binary works without the service
    if let Ok(dir) = std::env::var("PATHFINDER_MOCK_DIR") {
        warn!(%dir, "using mock pathfinder data");
        let pathfinder = MockPathfinder::from_dir(&dir)?;
        return route(pathfinder, locations, voyages, &spec).await;
    }

    let mut config = match std::env::var("PATHFINDER_URL") {
        Ok(url) => PathfinderConfig::new(url),
        Err(_) => PathfinderConfig::default(),
    };
    if let Ok(secs) = std::env::var("PATHFINDER_TIMEOUT_SECS") {
        config = config.with_timeout(secs.parse()?);
    }
    info!(url = %config.base_url, "using pathfinder service");

    let pathfinder = PathfinderClient::new(config)?;
    route(pathfinder, locations, voyages, &spec).await
}

async fn route<P: TransitPathProvider>(
    pathfinder: P,
    locations: InMemoryLocationRepository,
    voyages: InMemoryVoyageRepository,
    spec: &RouteSpecification,
) -> Result<(), BoxError> {
    let service = ExternalRoutingService::new(pathfinder, locations, voyages);
    let itineraries = service.fetch_routes_for_specification(spec).await?;

    println!(
        "{} itinerary(ies) from {} to {} arriving before {}",
        itineraries.len(),
        spec.origin(),
        spec.destination(),
        spec.arrival_deadline().to_rfc3339()
    );
    for (i, itinerary) in itineraries.iter().enumerate() {
        println!();
        print_itinerary(i + 1, itinerary);
    }

    Ok(())
}

fn print_itinerary(n: usize, itinerary: &Itinerary) {
    println!(
        "Itinerary {n}: {} leg(s), {} hours",
        itinerary.len(),
        itinerary.total_duration().num_hours()
    );
    for leg in itinerary.legs() {
        println!(
            "  {:<8} {} {} -> {} {}",
            leg.voyage().number().as_str(),
            leg.load_location().unlocode(),
            leg.load_time().format("%Y-%m-%d %H:%M"),
            leg.unload_location().unlocode(),
            leg.unload_time().format("%Y-%m-%d %H:%M"),
        );
    }
}
