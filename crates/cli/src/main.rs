use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "carpatlas")]
#[command(about = "Entity resolution for Carpathian places and trip-report routes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve place records into canonical locations
    ScrapeLocations {
        /// GeoNames country dump (tab separated)
        #[arg(long)]
        geonames: Vec<PathBuf>,
        /// Encyclopedia articles with their category, one JSON object per line
        #[arg(long)]
        wiki: Vec<PathBuf>,
        /// Trail-catalog export, one JSON point per line
        #[arg(long)]
        catalog: Vec<PathBuf>,
        /// Location records, one JSON object per line
        #[arg(long)]
        records: Vec<PathBuf>,
        /// Records resolved at once (overrides CARPATLAS_CONCURRENCY)
        #[arg(short, long)]
        concurrency: Option<usize>,
    },
    /// Ingest trip reports and resolve their routes
    ScrapeReports {
        /// Report records, one JSON object per line
        #[arg(long)]
        reports: Vec<PathBuf>,
        /// Report archive listings with Ukrainian labels, one JSON object per line
        #[arg(long)]
        listings: Vec<PathBuf>,
        #[arg(short, long)]
        concurrency: Option<usize>,
    },
    /// Print the stops parsed from a route description
    ParseRoute {
        text: String,
    },
    /// Show every location filed under a name
    Lookup {
        name: String,
    },
    /// Print row counts for every table
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ScrapeLocations { geonames, wiki, catalog, records, concurrency } => {
            commands::scrape::run_scrape_locations(&geonames, &wiki, &catalog, &records, concurrency)
                .await?;
        },
        Commands::ScrapeReports { reports, listings, concurrency } => {
            commands::scrape::run_scrape_reports(&reports, &listings, concurrency).await?;
        },
        Commands::ParseRoute { text } => commands::query::run_parse_route(&text)?,
        Commands::Lookup { name } => commands::query::run_lookup(&name).await?,
        Commands::Stats => commands::query::run_stats().await?,
    }

    Ok(())
}
