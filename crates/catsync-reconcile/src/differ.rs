//! Minimal update payloads between a local candidate and its remote record.
//!
//! Overwrites are conservative: tags only accumulate, prices only go up, and
//! a barcode is only ever written onto a variant whose barcode is unset.

use std::collections::BTreeSet;

use catsync_core::{format_tags, Product, ProductUpdate, Variant, VariantUpdate};

/// Switches for the write decisions that are policy rather than rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffPolicy {
    /// When `false` a computed barcode change is logged and left out of the
    /// payload.
    pub apply_barcode_updates: bool,
}

/// `true` unless every local tag is already on the remote record.
#[must_use]
pub fn needs_tag_update(remote: &BTreeSet<String>, local: &BTreeSet<String>) -> bool {
    !local.is_subset(remote)
}

/// Product-level changes: tag union and description.
#[must_use]
pub fn diff_product(local: &Product, remote: &Product) -> ProductUpdate {
    let mut update = ProductUpdate::default();
    let product_id = remote.id;

    if needs_tag_update(&remote.tags, &local.tags) {
        let merged: BTreeSet<String> = remote.tags.union(&local.tags).cloned().collect();
        tracing::info!(?product_id, tags = %format_tags(&merged), "tags will be updated");
        update.tags = Some(merged);
    } else {
        tracing::info!(?product_id, "no tags to update");
    }

    if local.description != remote.description {
        tracing::info!(?product_id, "description will be updated");
        update.description = Some(local.description.clone());
    }

    update
}

/// Variant-level changes: price increase and unset-barcode fill.
///
/// Returns `None` when there is nothing to write, or when `remote` has no
/// store id to address the write to.
#[must_use]
pub fn diff_variant(local: &Variant, remote: &Variant, policy: &DiffPolicy) -> Option<VariantUpdate> {
    let Some(variant_id) = remote.id else {
        tracing::warn!(option1 = %remote.option1, "remote variant has no id; skipping diff");
        return None;
    };
    let mut update = VariantUpdate::new(variant_id);

    if local.price > remote.price {
        tracing::info!(
            variant_id,
            from = %remote.price,
            to = %local.price,
            "price increase"
        );
        update.price = Some(local.price);
    } else if local.price == remote.price {
        tracing::info!(variant_id, price = %remote.price, "price unchanged");
    } else {
        tracing::info!(
            variant_id,
            current = %remote.price,
            candidate = %local.price,
            "candidate price is lower; keeping current price"
        );
    }

    if let Some(barcode) = barcode_fill(local, remote) {
        if policy.apply_barcode_updates {
            tracing::info!(variant_id, barcode, "barcode will be set");
            update.barcode = Some(barcode.to_string());
        } else {
            tracing::info!(
                variant_id,
                barcode,
                "barcode difference found; writes are disabled"
            );
        }
    }

    (!update.is_empty()).then_some(update)
}

/// The candidate barcode to write, if the remote one is unset and differs.
fn barcode_fill<'a>(local: &'a Variant, remote: &Variant) -> Option<&'a str> {
    if !remote.has_unset_barcode() || local.has_unset_barcode() {
        return None;
    }
    local.barcode.as_deref().map(str::trim)
}

#[cfg(test)]
#[path = "differ_test.rs"]
mod tests;
