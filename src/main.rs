use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use geosearch::search::distance_km;
use geosearch::{
    GeoSearchConfig, Geocoder, Location, MemoryStore, NearbySearch, OpenMeteoGeocoder, Precision,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GeoSearchConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().collect();
    let (seed_path, query) = match args.as_slice() {
        [_, seed_path, query, ..] => (seed_path.clone(), query.clone()),
        _ => {
            eprintln!("Usage: geosearch <locations.json> <query> [radius-km]");
            std::process::exit(2);
        }
    };
    let radius_km = args
        .get(3)
        .map(|raw| raw.parse::<f64>())
        .transpose()
        .context("Invalid radius")?
        .unwrap_or(config.defaults.search_radius_km);

    let seed = std::fs::read_to_string(&seed_path)
        .with_context(|| format!("Failed to read {seed_path}"))?;
    let locations: Vec<Location> = serde_json::from_str(&seed)
        .with_context(|| format!("Failed to parse locations from {seed_path}"))?;

    let store = Arc::new(MemoryStore::new());
    store.seed(locations).await?;

    let geocoder = Arc::new(OpenMeteoGeocoder::new(&config.geocoder)?);
    let search = NearbySearch::new(geocoder.clone(), store);

    let results = search.nearby(&query, radius_km).await?;

    match results.precision {
        Precision::Filtered => {
            println!(
                "Found {} locations within {radius_km}km of {query}:",
                results.matches.len()
            );
            let origin = geocoder.geocode(&query).await?; // cached by the first search
            for location in results
                .matches
                .iter()
                .take(config.defaults.max_results as usize)
            {
                println!(
                    "  - {} ({:.1}km away)",
                    location.name,
                    distance_km(origin, location.point)
                );
            }
        }
        Precision::Unfiltered { reason } => {
            println!(
                "Could not geocode {query} ({reason:?}); showing all {} locations:",
                results.matches.len()
            );
            for location in results
                .matches
                .iter()
                .take(config.defaults.max_results as usize)
            {
                println!(
                    "  - {} ({})",
                    location.name,
                    location.point.format_coordinates()
                );
            }
        }
    }

    Ok(())
}
