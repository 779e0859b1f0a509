//! Catalog reconciliation: matching, diffing, size ordering, images and the
//! run orchestrator that sequences them against a [`catsync_store::StoreApi`].

pub mod barcodes;
pub mod cache;
pub mod differ;
pub mod error;
pub mod images;
pub mod matcher;
pub mod options;
pub mod orchestrator;
pub mod sizing;
pub mod sort;

#[cfg(test)]
mod fixtures;

pub use barcodes::{check_barcodes, generate_barcodes, BarcodeReport, BatchStatus, ItemStatus};
pub use cache::{CachedMatch, CatalogCache};
pub use differ::{diff_product, diff_variant, needs_tag_update, DiffPolicy};
pub use error::ReconcileError;
pub use images::{reconcile_images, ImagePolicy, ImageReport, ImageTarget};
pub use matcher::{find, find_by_options, variants_matching_options, Criterion, Lookup};
pub use options::{reorder_options, sort_variants};
pub use orchestrator::{resolve, ReconcilePolicy, Reconciler, SyncReport};
pub use sizing::{sort_size_labels, SizeOrder};
pub use sort::stable_merge_sort;
