//! Store-wide barcode audit and per-product barcode generation.

use std::collections::HashSet;

use catsync_core::{Product, VariantUpdate};
use catsync_store::{StoreApi, StoreError};
use serde::Serialize;

/// Outcome for one variant in a barcode batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemStatus {
    /// Barcode was unset and has been written.
    Success,
    /// Barcode was already set; left untouched.
    Exists,
    Failed,
}

/// Overall batch outcome: `Failed` if any item failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantBarcode {
    pub variant_id: i64,
    pub title: Option<String>,
    pub status: ItemStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarcodeReport {
    pub product_id: i64,
    pub title: String,
    pub status: BatchStatus,
    pub variants: Vec<VariantBarcode>,
}

/// Barcodes that occur on more than one variant across `snapshot`.
///
/// A barcode seen `n` times is reported `n - 1` times, in snapshot order.
/// Unset barcodes are ignored.
#[must_use]
pub fn check_barcodes(snapshot: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for variant in snapshot.iter().flat_map(|p| &p.variants) {
        if variant.has_unset_barcode() {
            continue;
        }
        let Some(barcode) = variant.barcode.as_deref().map(str::trim) else {
            continue;
        };
        if !seen.insert(barcode) {
            duplicates.push(barcode.to_string());
        }
    }

    if duplicates.is_empty() {
        tracing::info!("no duplicate barcodes found");
    }
    for barcode in &duplicates {
        tracing::warn!(barcode = %barcode, "duplicate barcode found");
    }
    duplicates
}

/// Writes each variant's own id as its barcode where the barcode is unset.
///
/// # Errors
///
/// Returns `StoreError` only when the product itself cannot be fetched.
/// Per-variant write failures are reported in the batch instead.
pub async fn generate_barcodes<S: StoreApi>(
    store: &S,
    product_id: i64,
) -> Result<BarcodeReport, StoreError> {
    let product = store.get_product(product_id).await?;
    let mut report = BarcodeReport {
        product_id,
        title: product.title.clone(),
        status: BatchStatus::Success,
        variants: Vec::with_capacity(product.variants.len()),
    };

    for variant in &product.variants {
        let Some(variant_id) = variant.id else {
            tracing::warn!(product_id, option1 = %variant.option1, "variant has no id; skipping");
            continue;
        };

        let status = if variant.has_unset_barcode() {
            let update = VariantUpdate {
                barcode: Some(variant_id.to_string()),
                ..VariantUpdate::new(variant_id)
            };
            match store.update_variant(&update).await {
                Ok(_) => {
                    tracing::info!(product_id, variant_id, "barcode generated");
                    ItemStatus::Success
                }
                Err(e) => {
                    tracing::error!(product_id, variant_id, error = %e, "barcode write failed");
                    report.status = BatchStatus::Failed;
                    ItemStatus::Failed
                }
            }
        } else {
            ItemStatus::Exists
        };

        report.variants.push(VariantBarcode {
            variant_id,
            title: variant.title.clone(),
            status,
        });
    }

    Ok(report)
}
