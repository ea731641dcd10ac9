use anyhow::Context;
use bogortravel::{
    CatalogPaths, CatalogSource, DuplicatePolicy, GeoPoint, LoadOptions, RecommendQuery,
    RecommendResponse, SharedCatalog, DEFAULT_LIMIT, DEFAULT_RADIUS_KM,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend tourist places similar to one you like, close to where you are
#[derive(Parser, Debug)]
#[command(name = "bogortravel")]
#[command(about = "Hybrid tourist-place recommender", long_about = None)]
struct Args {
    /// Path to the place lookup table (CSV)
    #[arg(long, default_value = bogortravel_storage::DEFAULT_CATALOG_FILE)]
    catalog: PathBuf,

    /// Path to the similarity matrix (.npy)
    #[arg(long, default_value = bogortravel_storage::DEFAULT_MATRIX_FILE)]
    matrix: PathBuf,

    /// Place you like; defaults to the first place in the catalog
    #[arg(short, long)]
    place: Option<String>,

    /// Search radius in kilometers
    #[arg(short, long, default_value_t = DEFAULT_RADIUS_KM)]
    radius_km: f64,

    /// Number of recommendations
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Latitude of your location; defaults to the chosen place
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of your location; defaults to the chosen place
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// List every place name and exit
    #[arg(long)]
    list: bool,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,

    /// Resolve duplicate place names to their first row instead of failing
    #[arg(long)]
    allow_duplicates: bool,

    /// Require a symmetric matrix with self-similarity of 1.0
    #[arg(long)]
    strict_matrix: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("{:?}", args);

    let options = LoadOptions {
        duplicate_policy: if args.allow_duplicates {
            DuplicatePolicy::KeepFirst
        } else {
            DuplicatePolicy::Reject
        },
        strict_matrix: args.strict_matrix,
    };
    let source = CatalogSource::new(CatalogPaths::new(&args.catalog, &args.matrix)).with_options(options);
    let shared = SharedCatalog::new(source);

    let catalog = shared.get().context("Failed to load data; no recommendations are possible")?;
    info!("Catalog ready: {} places", catalog.len());

    if args.list {
        for name in catalog.all_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let reference = match args.place {
        Some(name) => name,
        None => catalog
            .all_names()
            .first()
            .map(|name| name.to_string())
            .context("Catalog is empty")?,
    };

    let origin = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => GeoPoint::new(lat, lon),
        _ => catalog.location_of(&reference)?,
    };

    let query = RecommendQuery::new(reference.as_str(), origin)
        .radius_km(args.radius_km)
        .limit(args.limit);
    let ranker = shared.ranker()?;
    let results = ranker.query(&query)?;

    let response = RecommendResponse::new(reference, origin, args.radius_km, &results);
    if args.json {
        println!("{}", response.to_json()?);
    } else {
        print!("{}", response);
        if response.is_empty() {
            println!();
        }
    }

    Ok(())
}
