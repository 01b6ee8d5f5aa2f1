use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod api;
mod config;
mod domain;
mod map;
mod osm;

use api::fetch_amenities;
use config::{FileConfig, defaults};
use domain::Amenity;
use map::{Highlight, MapDocument, write_html};
use osm::parse_places;

/// Render nearby restaurants, cafes and hotels as a clustered
/// interactive map
///
/// Examples:
///   # Default map of Dhanmondi, Dhaka
///   poimap
///
///   # Different center, wider search, custom output file
///   poimap --lat 23.8103 --lon 90.4125 -r 2000 -o gulshan.html
///
///   # Use a config file
///   poimap --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "poimap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches poimap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Map center latitude
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Map center longitude
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Search radius in meters
    #[arg(short = 'r', long)]
    radius: Option<u32>,

    /// Initial map zoom level
    #[arg(short = 'z', long)]
    zoom: Option<u8>,

    /// Output HTML file path
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };
    let file_config = file_config.unwrap_or_default();

    let lat = args.lat.or(file_config.lat).unwrap_or(defaults::CENTER_LAT);
    let lon = args.lon.or(file_config.lon).unwrap_or(defaults::CENTER_LON);
    let radius = args
        .radius
        .or(file_config.radius)
        .unwrap_or(defaults::RADIUS_M);
    let zoom = args.zoom.or(file_config.zoom).unwrap_or(defaults::ZOOM);
    let output_path = args
        .output
        .or(file_config.output)
        .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT));
    let highlight_lat = file_config.highlight_lat.unwrap_or(defaults::HIGHLIGHT_LAT);
    let highlight_lon = file_config.highlight_lon.unwrap_or(defaults::HIGHLIGHT_LON);
    let highlight_name = file_config
        .highlight_name
        .unwrap_or_else(|| defaults::HIGHLIGHT_NAME.to_string());
    let highlight_tooltip = file_config
        .highlight_tooltip
        .unwrap_or_else(|| defaults::HIGHLIGHT_TOOLTIP.to_string());
    let verbose = args.verbose || file_config.verbose.unwrap_or(false);
    let overpass_config = file_config.overpass.unwrap_or_default();

    if radius == 0 {
        bail!("Search radius must be greater than zero");
    }

    println!("poimap - Nearby Places Map Generator");
    println!("====================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Center: ({:.4}, {:.4})", lat, lon);
        println!("  Radius: {}m", radius);
        println!("  Zoom: {}", zoom);
        println!(
            "  Highlight: {} ({:.4}, {:.4})",
            highlight_name, highlight_lat, highlight_lon
        );
        println!("  Output: {}", output_path.display());
        println!("  Overpass: {}", overpass_config.url);
        println!("  Timeout: {}s", overpass_config.timeout_secs);
        println!();
    }

    let center = (lat, lon);
    let highlight = Highlight::new(highlight_name, highlight_tooltip, highlight_lat, highlight_lon);
    let mut doc = MapDocument::new(center, zoom, highlight);

    for amenity in Amenity::ALL {
        let label = amenity.label().to_lowercase();
        let spinner = create_spinner(&format!("Fetching {}...", label));
        let start = Instant::now();

        match fetch_amenities(center, radius, amenity.tag(), &overpass_config) {
            Ok(response) => {
                let places = parse_places(&response);
                spinner.finish_with_message(format!(
                    "Fetched {} {} [{:.1}s]",
                    places.len(),
                    label,
                    start.elapsed().as_secs_f32()
                ));
                doc.add_layer(amenity, places);
            }
            Err(e) => {
                // A failed category still gets its (empty) layer so
                // the map keeps all three toggles
                spinner.finish_with_message(format!(
                    "Fetching {} failed [{:.1}s]",
                    label,
                    start.elapsed().as_secs_f32()
                ));
                eprintln!("Error: API request failed. {}", e);
                doc.add_layer(amenity, Vec::new());
            }
        }
    }

    let spinner = create_spinner("Writing map...");
    let start = Instant::now();
    write_html(&output_path, &doc).context("Failed to write map file")?;
    spinner.finish_with_message(format!(
        "Wrote {} [{:.1}s]",
        output_path.display(),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Map generated! Open {} in a browser. Total time: {:.1}s",
        output_path.display(),
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
