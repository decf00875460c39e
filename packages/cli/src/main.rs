//! MapPro: grounded local business search in the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use finder::ai::GeminiModel;
use finder::{
    export, Coordinate, Finder, FixedLocator, Locator, NominatimLocator, NullLocator,
    SearchEvent, SearchState,
};

mod render;

#[derive(Debug, Parser)]
#[command(name = "mappro")]
#[command(about = "Find top-rated businesses with maps-grounded AI search")]
struct Cli {
    /// Business category to search for
    #[arg(long, default_value = "Restaurants")]
    category: String,

    /// Region to search in
    #[arg(long, default_value = "San Francisco, CA")]
    region: String,

    /// Bias grounding toward a named place (geocoded best-effort)
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    near: Option<String>,

    /// Bias grounding toward this latitude
    #[arg(long, requires = "lng")]
    lat: Option<f64>,

    /// Bias grounding toward this longitude
    #[arg(long, requires = "lat")]
    lng: Option<f64>,

    /// Write results to a CSV file
    #[arg(long)]
    csv: bool,

    /// Write results to a JSON file
    #[arg(long)]
    json: bool,

    /// Directory export files are written into
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Print the raw model reply after the results
    #[arg(long)]
    raw: bool,

    /// Gemini model id
    #[arg(long, default_value = finder::ai::DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so piped stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let model = GeminiModel::from_env()
        .context("GEMINI_API_KEY is not set; export it or add it to a .env file")?
        .with_model(&cli.model);
    let finder = Finder::new(model);

    let bias = resolve_bias(&cli).await;

    let mut state = SearchState::new(&cli.category, &cli.region);
    state = state.apply(SearchEvent::Started {
        category: cli.category.clone(),
        region: cli.region.clone(),
    });

    render::print_header(&state.category, &state.region, bias);

    let searched = finder.search(&state.category, &state.region, bias).await;
    match searched {
        Ok(outcome) => {
            let raw_text = outcome.raw_text;
            state = state.apply(SearchEvent::Succeeded {
                profiles: outcome.profiles,
            });
            render::print_results(&state);
            if cli.raw {
                render::print_raw(&raw_text);
            }
            write_exports(&cli, &state)?;
        }
        Err(e) => {
            state = state.apply(SearchEvent::Failed {
                detail: e.to_string(),
            });
            render::print_results(&state);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Resolve the coordinate bias once, before the search.
///
/// Explicit coordinates win over a named place; with neither, the
/// `MAPPRO_LOCATION` place from the environment is tried, and an
/// unresolvable location simply leaves the search unbiased.
async fn resolve_bias(cli: &Cli) -> Option<Coordinate> {
    let locator: Box<dyn Locator> = match (cli.lat, cli.lng, cli.near.as_deref()) {
        (Some(lat), Some(lng), _) => Box::new(FixedLocator(Coordinate::new(lat, lng))),
        (_, _, Some(place)) => Box::new(NominatimLocator::new(place)),
        _ => match std::env::var("MAPPRO_LOCATION") {
            Ok(place) if !place.trim().is_empty() => Box::new(NominatimLocator::new(place)),
            _ => Box::new(NullLocator),
        },
    };

    locator.locate().await
}

/// Write the requested export files, skipping entirely when the search
/// produced no records.
fn write_exports(cli: &Cli, state: &SearchState) -> Result<()> {
    if state.results.is_empty() {
        return Ok(());
    }

    if cli.csv {
        let path = cli
            .out
            .join(export::export_filename(&state.category, &state.region, "csv"));
        std::fs::write(&path, export::to_csv(&state.results))
            .with_context(|| format!("failed to write {}", path.display()))?;
        render::print_export_path(&path);
    }

    if cli.json {
        let path = cli
            .out
            .join(export::export_filename(&state.category, &state.region, "json"));
        std::fs::write(&path, export::to_json(&state.results)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        render::print_export_path(&path);
    }

    Ok(())
}
