//! Subcommand handlers.
//!
//! Each handler builds the store client from config, runs one operation and
//! prints its report as JSON on stdout. Logs go to stderr via `tracing`.

use std::path::Path;

use anyhow::Context;
use catsync_core::{AppConfig, Product};
use catsync_reconcile::{
    check_barcodes, find, generate_barcodes, CatalogCache, Criterion, ReconcilePolicy, Reconciler,
};
use catsync_store::{ShopifyAdminClient, StoreApi};

fn build_client(config: &AppConfig) -> anyhow::Result<ShopifyAdminClient> {
    ShopifyAdminClient::new(
        &config.store_url,
        config.store_access_token.as_deref(),
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build store client: {e}"))
}

/// The catalog to resolve against: the local cache when `offline`, the
/// store's product list otherwise.
async fn load_snapshot(
    config: &AppConfig,
    client: &ShopifyAdminClient,
    offline: bool,
) -> anyhow::Result<Vec<Product>> {
    if offline {
        let cache = CatalogCache::new(&config.cache_path);
        let products = cache.load()?;
        tracing::info!(path = %config.cache_path.display(), products = products.len(), "loaded catalog cache");
        Ok(products)
    } else {
        let products = client.get_all_products().await?;
        tracing::info!(products = products.len(), "fetched store catalog");
        Ok(products)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Reconcile one candidate file against the store.
///
/// # Errors
///
/// Returns an error if config-backed resources (size chart, candidate file,
/// snapshot) cannot be loaded, or the product cannot be created or fetched.
/// Later step failures are reported in the printed summary.
pub(crate) async fn run_sync(
    config: &AppConfig,
    candidate_path: &Path,
    offline: bool,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(candidate_path)
        .with_context(|| format!("failed to read candidate {}", candidate_path.display()))?;
    let candidate: Product = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse candidate {}", candidate_path.display()))?;
    let chart = catsync_core::load_size_chart(&config.size_chart_path)?;

    let client = build_client(config)?;
    let snapshot = load_snapshot(config, &client, offline).await?;
    let cache = CatalogCache::new(&config.cache_path);

    let report = Reconciler::new(&client, &chart, ReconcilePolicy::from_app_config(config))
        .with_cache(&cache)
        .sync_product(&candidate, &snapshot)
        .await?;
    print_json(&report)
}

pub(crate) async fn run_sort_options(config: &AppConfig, product_id: i64) -> anyhow::Result<()> {
    let chart = catsync_core::load_size_chart(&config.size_chart_path)?;
    let client = build_client(config)?;

    let sorted = Reconciler::new(&client, &chart, ReconcilePolicy::from_app_config(config))
        .sort_options(product_id)
        .await?;
    if sorted {
        println!("product {product_id}: options re-sorted");
    } else {
        println!("product {product_id}: options already in order");
    }
    Ok(())
}

pub(crate) async fn run_check_barcodes(config: &AppConfig, offline: bool) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let snapshot = load_snapshot(config, &client, offline).await?;
    print_json(&check_barcodes(&snapshot))
}

pub(crate) async fn run_generate_barcodes(
    config: &AppConfig,
    product_id: i64,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let report = generate_barcodes(&client, product_id).await?;
    print_json(&report)
}

pub(crate) async fn run_find_barcode(
    config: &AppConfig,
    barcode: &str,
    offline: bool,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let snapshot = load_snapshot(config, &client, offline).await?;

    match find(&snapshot, &Criterion::Barcode(barcode)).variant() {
        Some(variant) => print_json(variant),
        None => {
            tracing::info!(barcode, "no variant carries this barcode");
            println!("no variant with barcode {barcode}");
            Ok(())
        }
    }
}
