//! Diagnostic CLI for the tire-directory comparison engine.
//!
//! Runs a full search or the landing-page statistics pass against the
//! configured row store and prints the results as plain text. The web
//! presentation layer is a separate consumer of the same engine API.

mod search;
mod stats;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use treadquote_engine::{SearchParams, SortMode};
use treadquote_store::StoreClient;

#[derive(Debug, Parser)]
#[command(name = "treadquote")]
#[command(about = "Tire price comparison against the directory row store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a price-comparison search.
    Search(SearchArgs),
    /// Print directory statistics (shop counts by province and city).
    Stats,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Tire category id.
    #[arg(long)]
    category: Option<i64>,
    /// Tire size id.
    #[arg(long)]
    size: Option<i64>,
    /// Brand id.
    #[arg(long)]
    brand: Option<i64>,
    /// Number of tires to quote.
    #[arg(long, default_value_t = 4)]
    quantity: u32,
    /// Minimum price per tire.
    #[arg(long)]
    min_price: Option<Decimal>,
    /// Maximum price per tire.
    #[arg(long)]
    max_price: Option<Decimal>,
    /// Include per-tire installation in the quoted total.
    #[arg(long)]
    install: bool,
    /// Full province name (case-insensitive).
    #[arg(long)]
    province: Option<String>,
    /// City substring (case-insensitive).
    #[arg(long)]
    city: Option<String>,
    #[arg(long, value_enum, default_value_t = SortArg::Price)]
    sort: SortArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// Cheapest total price first.
    Price,
    /// Highest-rated shop first.
    Rating,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Price => SortMode::PriceAscending,
            SortArg::Rating => SortMode::RatingDescending,
        }
    }
}

impl From<SearchArgs> for SearchParams {
    fn from(args: SearchArgs) -> Self {
        SearchParams {
            category_id: args.category,
            size_id: args.size,
            brand_id: args.brand,
            quantity: args.quantity,
            min_price: args.min_price,
            max_price: args.max_price,
            installation: args.install,
            province: args.province,
            city: args.city,
            sort: args.sort.into(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = treadquote_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store = StoreClient::from_config(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => search::run(&store, args.into()).await,
        Commands::Stats => stats::run(&store).await,
    }
}
