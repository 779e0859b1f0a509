mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "catsync")]
#[command(about = "Reconcile a local product catalog against the remote store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or update one product from a candidate JSON file
    Sync {
        /// Path to the candidate product (JSON)
        candidate: PathBuf,
        /// Resolve the candidate against the local catalog cache instead of
        /// fetching the store's product list
        #[arg(long)]
        offline: bool,
    },
    /// Re-sort size option values and the variant listing of a product
    SortOptions { product_id: i64 },
    /// Report barcodes used by more than one variant
    CheckBarcodes {
        #[arg(long)]
        offline: bool,
    },
    /// Fill unset variant barcodes with the variant id
    GenerateBarcodes { product_id: i64 },
    /// Find the variant carrying a barcode
    FindBarcode {
        barcode: String,
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = catsync_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Sync { candidate, offline } => {
            commands::run_sync(&config, &candidate, offline).await
        }
        Commands::SortOptions { product_id } => {
            commands::run_sort_options(&config, product_id).await
        }
        Commands::CheckBarcodes { offline } => {
            commands::run_check_barcodes(&config, offline).await
        }
        Commands::GenerateBarcodes { product_id } => {
            commands::run_generate_barcodes(&config, product_id).await
        }
        Commands::FindBarcode { barcode, offline } => {
            commands::run_find_barcode(&config, &barcode, offline).await
        }
    }
}
