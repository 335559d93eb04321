//! Command-line street lookup.
//!
//! `wayside "40.7217267, -73.9870392"` prints the description of the
//! nearest street segment and a map link.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use wayside::config::Config;
use wayside::models::{GeoPoint, NetworkKind};
use wayside::LookupService;

#[derive(Parser, Debug)]
#[command(name = "wayside")]
#[command(about = "Describe the street nearest to a coordinate pair")]
struct Args {
    /// Coordinates as "lat, lng"
    #[arg(default_value = "40.7217267, -73.9870392")]
    coords: String,

    /// Road network radius around the point, meters
    #[arg(long)]
    graph_radius: Option<f64>,

    /// Landmark search radius, meters
    #[arg(long)]
    landmark_radius: Option<f64>,

    /// Overpass API endpoint
    #[arg(long)]
    overpass_url: Option<String>,

    /// Include every highway-tagged way, not just drivable roads
    #[arg(long)]
    all_ways: bool,

    /// Skip the landmark lookup
    #[arg(long)]
    no_landmark: bool,

    /// Optional TOML config file; flags override its values
    #[arg(long)]
    config: Option<String>,

    /// Log at debug level (shows resolution internals)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if let Some(radius) = args.graph_radius {
        config.graph_radius_m = radius;
    }
    if let Some(radius) = args.landmark_radius {
        config.landmark_radius_m = radius;
    }
    if let Some(url) = args.overpass_url {
        config.overpass_url = url;
    }
    if args.all_ways {
        config.network = NetworkKind::All;
    }

    let point = GeoPoint::parse(&args.coords)?;
    let service = LookupService::new(config)?;

    let result = service.locate(point, !args.no_landmark).await?;

    println!("{}", result.description);
    println!("Map: {}", result.map_link);

    Ok(())
}
