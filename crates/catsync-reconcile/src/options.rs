//! Canonical ordering of option values and of the variant listing.
//!
//! The second option axis is the primary size axis. Its values are sorted
//! with [`sort_size_labels`]; a third axis, when present, is sorted
//! independently with its own classification. Variants are then listed by
//! first-axis position, then size rank, then third-axis rank.

use catsync_core::{Product, ProductUpdate, SizeChart, Variant, VariantPosition};

use crate::sizing::{sort_size_labels, usize_to_rank, SizeOrder};
use crate::sort::stable_merge_sort;

/// Computes the option and variant reorder for `product`.
///
/// Only the parts whose order actually changes are set, so an already
/// sorted product yields an empty update.
#[must_use]
pub fn reorder_options(product: &Product, chart: &SizeChart) -> ProductUpdate {
    let mut update = ProductUpdate::default();
    if product.options.len() < 2 {
        tracing::debug!(product_id = ?product.id, "fewer than two options; nothing to sort");
        return update;
    }

    let mut options = product.options.clone();
    for option in options.iter_mut().skip(1).take(2) {
        option.values = sort_size_labels(&option.values, chart);
    }
    if options != product.options {
        update.options = Some(options);
    }

    let sorted = sort_variants(product, chart);
    let order: Vec<VariantPosition> = sorted
        .iter()
        .filter_map(|v| v.id)
        .zip(1u32..)
        .map(|(id, position)| VariantPosition { id, position })
        .collect();
    let current: Vec<i64> = product.variant_ids();
    if order.iter().map(|p| p.id).ne(current.iter().copied()) {
        update.variant_order = Some(order);
    }

    tracing::info!(
        product_id = ?product.id,
        options_changed = update.options.is_some(),
        variants_changed = update.variant_order.is_some(),
        "computed option order"
    );
    update
}

/// Variants of `product` in canonical listing order.
#[must_use]
pub fn sort_variants(product: &Product, chart: &SizeChart) -> Vec<Variant> {
    let first_axis = product.option_values(0).unwrap_or_default();
    let size_order = product
        .option_values(1)
        .map(|values| SizeOrder::resolve(values, chart));
    let third_order = product
        .option_values(2)
        .map(|values| SizeOrder::resolve(values, chart));

    stable_merge_sort(&product.variants, |variant| {
        let position = first_axis
            .iter()
            .position(|value| Some(value.trim()) == variant.option(0))
            .unwrap_or(first_axis.len());
        (
            usize_to_rank(position),
            axis_rank(size_order.as_ref(), variant.option(1)),
            axis_rank(third_order.as_ref(), variant.option(2)),
        )
    })
}

fn axis_rank(order: Option<&SizeOrder<'_>>, label: Option<&str>) -> f64 {
    match (order, label) {
        (Some(order), Some(label)) => order.rank(label),
        _ => 0.0,
    }
}
