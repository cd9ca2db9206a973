mod db;
mod search;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vendora_core::SortMode;

#[derive(Debug, Parser)]
#[command(name = "vendora-cli")]
#[command(about = "Vendora vendor matching command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations.
    Migrate,
    /// Upsert vendors from a YAML catalog file into the database.
    Seed {
        #[arg(long)]
        file: PathBuf,
    },
    /// Run a search and print the JSON response.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Search a YAML vendor snapshot instead of the database.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long, env = "VENDORA_MATCHING_PATH", default_value = "./config/matching.yaml")]
    matching: PathBuf,
    #[arg(long, env = "VENDORA_CATALOG_TIMEOUT_MS", default_value_t = 3000)]
    timeout_ms: u64,
    #[arg(long, short)]
    query: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    area: Option<String>,
    #[arg(long)]
    budget_min: Option<f64>,
    #[arg(long)]
    budget_max: Option<f64>,
    #[arg(long)]
    radius_km: Option<f64>,
    #[arg(long, default_value_t = SortMode::Relevance)]
    sort: SortMode,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    page_size: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Logs go to stderr so `search` output stays pipeable JSON.
    let level = std::env::var("VENDORA_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Migrate => db::run_migrate().await,
        Commands::Seed { file } => db::run_seed(&file).await,
        Commands::Search(args) => search::run_search(args).await,
    }
}

#[cfg(test)]
mod tests;
