use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use paintday::config::AppConfig;
use paintday::logger;
use paintday::render::ForecastReport;
use paintday::scoring;
use paintday::weather::client::WeatherClient;
use paintday::weather::{LocationInfo, PaintType};

/// Weather-driven advisory tool for hobby paint work.
#[derive(Debug, Parser)]
#[command(name = "paintday", version, about)]
struct Cli {
    /// Latitude of the place to check. Falls back to the [location] config block.
    #[arg(long)]
    lat: Option<f64>,

    /// Longitude of the place to check.
    #[arg(long)]
    lon: Option<f64>,

    /// Paint system to score for. Defaults to the configured paint.
    #[arg(long, value_enum)]
    paint: Option<PaintType>,

    /// Score every paint type from the same fetched forecast.
    #[arg(long)]
    all_paints: bool,

    /// Path to the config file.
    #[arg(long, default_value = "config/default.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_from(&cli.config)?;

    logger::init_logging(&config.monitoring)?;

    let (latitude, longitude) = match (cli.lat, cli.lon, config.location) {
        (Some(lat), Some(lon), _) => (lat, lon),
        (None, None, Some(loc)) => (loc.latitude, loc.longitude),
        _ => bail!(
            "location unavailable: pass both --lat and --lon, or set a [location] block in the config"
        ),
    };

    tracing::info!(
        latitude,
        longitude,
        forecast_days = config.forecast.forecast_days,
        "paintday starting"
    );

    let client = WeatherClient::new(config.forecast.clone(), config.geocode.clone());

    // Geocoding is best-effort; an empty result just means coordinates are
    // shown instead of a place name.
    let place = client.reverse_geocode(latitude, longitude).await;
    let location = LocationInfo {
        latitude,
        longitude,
        place: (!place.is_empty()).then_some(place),
    };

    let raw_days = client
        .fetch_forecast(&location)
        .await
        .context("could not load the forecast")?;

    let today = chrono::Local::now().date_naive();
    let paints: Vec<PaintType> = if cli.all_paints {
        PaintType::ALL.to_vec()
    } else {
        vec![cli.paint.unwrap_or(config.advisor.default_paint)]
    };

    // One fetch serves every paint type; scoring is pure recomputation over
    // the raw data already in hand.
    for paint in paints {
        let forecasts = scoring::calc_forecasts(&raw_days, paint);
        let report = ForecastReport {
            location: &location,
            paint,
            forecasts: &forecasts,
            today,
        };
        println!("{report}");
    }

    Ok(())
}
