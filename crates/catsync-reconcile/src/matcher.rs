//! Lookups of existing remote records in a catalog snapshot.
//!
//! A snapshot is any slice of products: the result of `get_all_products`, or
//! the local catalog cache. Scans are linear and the first match in snapshot
//! order wins; uniqueness of SKUs and barcodes is not verified here (see
//! [`crate::barcodes::check_barcodes`] for the duplicate audit).

use catsync_core::{is_unset_barcode, Product, Variant};

/// What to look a record up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<'a> {
    /// Variant-level. Blank SKUs never match.
    Sku(&'a str),
    /// Variant-level. Unset barcodes (blank, `"None"`) never match.
    Barcode(&'a str),
    /// Product-level.
    ProductId(i64),
}

/// Outcome of a lookup. `NotFound` is a normal result that sends callers down
/// the create path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'s> {
    Product(&'s Product),
    Variant {
        product: &'s Product,
        variant: &'s Variant,
    },
    NotFound,
}

impl<'s> Lookup<'s> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !matches!(self, Lookup::NotFound)
    }

    /// The product that owns the match, for either kind of hit.
    #[must_use]
    pub fn product(&self) -> Option<&'s Product> {
        match *self {
            Lookup::Product(product) | Lookup::Variant { product, .. } => Some(product),
            Lookup::NotFound => None,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Option<&'s Variant> {
        match *self {
            Lookup::Variant { variant, .. } => Some(variant),
            _ => None,
        }
    }
}

/// Finds the first record in `snapshot` satisfying `criterion`.
#[must_use]
pub fn find<'s>(snapshot: &'s [Product], criterion: &Criterion<'_>) -> Lookup<'s> {
    match *criterion {
        Criterion::ProductId(id) => snapshot
            .iter()
            .find(|p| p.id == Some(id))
            .map_or(Lookup::NotFound, Lookup::Product),
        Criterion::Sku(sku) => {
            let sku = sku.trim();
            if sku.is_empty() {
                return Lookup::NotFound;
            }
            find_variant(snapshot, |v| v.sku.as_deref().map(str::trim) == Some(sku))
        }
        Criterion::Barcode(barcode) => {
            if is_unset_barcode(Some(barcode)) {
                return Lookup::NotFound;
            }
            let barcode = barcode.trim();
            find_variant(snapshot, |v| {
                !v.has_unset_barcode() && v.barcode.as_deref().map(str::trim) == Some(barcode)
            })
        }
    }
}

/// Finds the variant of `product` whose option tuple equals `wanted`'s.
///
/// Scoped to a single product's variant list; see [`Variant::same_options`]
/// for how tuples compare.
#[must_use]
pub fn find_by_options<'s>(product: &'s Product, wanted: &Variant) -> Lookup<'s> {
    product
        .variants
        .iter()
        .find(|remote| wanted.same_options(remote))
        .map_or(Lookup::NotFound, |variant| Lookup::Variant { product, variant })
}

/// Every variant of `product` whose option tuple equals `wanted`'s. A local
/// variant without option3 matches each option3 variant of its pair.
#[must_use]
pub fn variants_matching_options<'s>(product: &'s Product, wanted: &Variant) -> Vec<&'s Variant> {
    product
        .variants
        .iter()
        .filter(|remote| wanted.same_options(remote))
        .collect()
}

fn find_variant<'s, F>(snapshot: &'s [Product], pred: F) -> Lookup<'s>
where
    F: Fn(&Variant) -> bool,
{
    snapshot
        .iter()
        .find_map(|product| {
            product
                .variants
                .iter()
                .find(|v| pred(v))
                .map(|variant| Lookup::Variant { product, variant })
        })
        .unwrap_or(Lookup::NotFound)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
