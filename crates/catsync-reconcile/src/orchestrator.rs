//! Reconciliation run orchestration.

use catsync_core::{AppConfig, Product, SizeChart, Variant};
use catsync_store::{StoreApi, StoreError};
use serde::Serialize;

use crate::cache::CatalogCache;
use crate::differ::{diff_product, diff_variant, DiffPolicy};
use crate::error::ReconcileError;
use crate::images::{reconcile_images, ImagePolicy, ImageReport, ImageTarget};
use crate::matcher::{find, variants_matching_options, Criterion};
use crate::options::reorder_options;

/// Write-policy switches for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcilePolicy {
    pub apply_barcode_updates: bool,
    pub dedupe_image_variant_ids: bool,
}

impl ReconcilePolicy {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            apply_barcode_updates: config.apply_barcode_updates,
            dedupe_image_variant_ids: config.dedupe_image_variant_ids,
        }
    }

    fn diff(self) -> DiffPolicy {
        DiffPolicy {
            apply_barcode_updates: self.apply_barcode_updates,
        }
    }

    fn images(self) -> ImagePolicy {
        ImagePolicy {
            dedupe_variant_ids: self.dedupe_image_variant_ids,
        }
    }
}

/// What one `sync_product` run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub product_id: i64,
    /// The product did not exist and was created by this run.
    pub created: bool,
    pub product_updated: bool,
    pub variants_updated: Vec<i64>,
    pub variants_created: Vec<i64>,
    pub images: ImageReport,
    pub options_sorted: bool,
    /// Steps that failed and were skipped.
    pub failed_steps: usize,
}

pub struct Reconciler<'a, S> {
    store: &'a S,
    chart: &'a SizeChart,
    policy: ReconcilePolicy,
    cache: Option<&'a CatalogCache>,
}

impl<'a, S: StoreApi> Reconciler<'a, S> {
    pub fn new(store: &'a S, chart: &'a SizeChart, policy: ReconcilePolicy) -> Self {
        Self {
            store,
            chart,
            policy,
            cache: None,
        }
    }

    /// Records created products in `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: &'a CatalogCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Reconciles one local candidate against the store.
    ///
    /// 1. Resolve the candidate in `snapshot` by id, then variant SKU, then
    ///    variant barcode.
    /// 2. Not found: create the product. Found: diff and update the product,
    ///    update matching variants, create the missing ones.
    /// 3. Reconcile images against the store's current image list.
    /// 4. Re-sort option values and the variant listing.
    ///
    /// Calls are issued one at a time, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Store`] only if the product cannot be created
    /// or fetched. Failures in later steps are logged, counted in
    /// [`SyncReport::failed_steps`] and do not stop the run.
    pub async fn sync_product(
        &self,
        candidate: &Product,
        snapshot: &[Product],
    ) -> Result<SyncReport, ReconcileError> {
        let mut report = SyncReport::default();

        // Step 1 + 2: product and variants.
        let association = match resolve(candidate, snapshot) {
            Some(product_id) => {
                tracing::info!(product_id, "will process updates to existing product");
                report.product_id = product_id;
                self.update_existing(product_id, candidate, &mut report).await?
            }
            None => {
                tracing::info!(title = %candidate.title, "product not found; creating");
                let created = self.create(candidate, &mut report).await?;
                report.created = true;
                report.product_id = created;
                report.variants_created.clone()
            }
        };
        let product_id = report.product_id;

        // Step 3: images.
        match self.store.get_images(product_id).await {
            Ok(remote) => {
                let target = ImageTarget {
                    variant_ids: &association,
                    alt: candidate.color.as_deref(),
                };
                report.images = reconcile_images(
                    self.store,
                    product_id,
                    &candidate.images,
                    &remote,
                    &target,
                    &self.policy.images(),
                )
                .await;
                report.failed_steps += report.images.failed;
            }
            Err(e) => {
                tracing::error!(product_id, error = %e, "unable to fetch images; skipping");
                report.failed_steps += 1;
            }
        }

        // Step 4: option order.
        match self.sort_options(product_id).await {
            Ok(sorted) => report.options_sorted = sorted,
            Err(e) => {
                tracing::error!(product_id, error = %e, "unable to sort options");
                report.failed_steps += 1;
            }
        }

        tracing::info!(
            product_id,
            created = report.created,
            variants_updated = report.variants_updated.len(),
            variants_created = report.variants_created.len(),
            images_uploaded = report.images.uploaded.len(),
            images_updated = report.images.updated.len(),
            failed_steps = report.failed_steps,
            "reconciliation finished"
        );
        Ok(report)
    }

    /// Re-sorts the option values and variant listing of `product_id`.
    ///
    /// Returns `true` if an update was written, `false` if the product was
    /// already in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Store`] if the product cannot be fetched or
    /// the update is rejected.
    pub async fn sort_options(&self, product_id: i64) -> Result<bool, ReconcileError> {
        let product = self.store.get_product(product_id).await?;
        let update = reorder_options(&product, self.chart);
        if update.is_empty() {
            tracing::info!(product_id, "options already sorted");
            return Ok(false);
        }
        self.store.update_product(product_id, &update).await?;
        tracing::info!(product_id, "options sorted");
        Ok(true)
    }

    /// Creates the product and returns its id. Created variant ids go into
    /// the report.
    async fn create(
        &self,
        candidate: &Product,
        report: &mut SyncReport,
    ) -> Result<i64, ReconcileError> {
        let created = self.store.create_product(candidate).await?;
        let Some(product_id) = created.id else {
            return Err(ReconcileError::Store(StoreError::EmptyResponse {
                context: "created product id".to_string(),
            }));
        };
        tracing::info!(product_id, variants = created.variants.len(), "product created");
        report.variants_created = created.variant_ids();

        if let Some(cache) = self.cache {
            if let Err(e) = cache.append(&created) {
                tracing::error!(product_id, error = %e, "unable to record product in cache");
                report.failed_steps += 1;
            }
        }
        Ok(product_id)
    }

    /// Applies product and variant deltas. Returns the ids of variants
    /// created by this run.
    async fn update_existing(
        &self,
        product_id: i64,
        candidate: &Product,
        report: &mut SyncReport,
    ) -> Result<Vec<i64>, ReconcileError> {
        let remote = self.store.get_product(product_id).await?;

        let update = diff_product(candidate, &remote);
        if !update.is_empty() {
            match self.store.update_product(product_id, &update).await {
                Ok(_) => {
                    tracing::info!(product_id, "product update successful");
                    report.product_updated = true;
                }
                Err(e) => {
                    tracing::error!(product_id, error = %e, "unable to update product");
                    report.failed_steps += 1;
                }
            }
        }

        let (matched, new): (Vec<_>, Vec<_>) = candidate
            .variants
            .iter()
            .map(|local| (local, variants_matching_options(&remote, local)))
            .partition(|(_, existing)| !existing.is_empty());

        // A two-axis candidate updates every option3 variant of its pair.
        for (local, existing) in matched {
            for remote_variant in existing {
                self.update_variant(local, remote_variant, report).await;
            }
        }

        for (local, _) in new {
            self.create_variant(product_id, local, report).await;
        }

        Ok(report.variants_created.clone())
    }

    async fn update_variant(&self, local: &Variant, existing: &Variant, report: &mut SyncReport) {
        let Some(update) = diff_variant(local, existing, &self.policy.diff()) else {
            return;
        };
        match self.store.update_variant(&update).await {
            Ok(_) => {
                tracing::info!(variant_id = update.id, "variant updated");
                report.variants_updated.push(update.id);
            }
            Err(e) => {
                tracing::error!(variant_id = update.id, error = %e, "unable to update variant");
                report.failed_steps += 1;
            }
        }
    }

    async fn create_variant(&self, product_id: i64, local: &Variant, report: &mut SyncReport) {
        match self.store.create_variant(product_id, local).await {
            Ok(created) => {
                tracing::info!(product_id, variant_id = ?created.id, "new variant created");
                report.variants_created.extend(created.id);
            }
            Err(e) => {
                tracing::error!(product_id, option1 = %local.option1, error = %e, "unable to create variant");
                report.failed_steps += 1;
            }
        }
    }
}

/// Finds the remote product id for `candidate` in `snapshot`.
///
/// Tries the candidate's own id, then each variant SKU, then each variant
/// barcode; the first hit wins.
#[must_use]
pub fn resolve(candidate: &Product, snapshot: &[Product]) -> Option<i64> {
    let by_id = candidate.id.map(Criterion::ProductId);
    let by_sku = candidate
        .variants
        .iter()
        .filter_map(|v| v.sku.as_deref())
        .map(Criterion::Sku);
    let by_barcode = candidate
        .variants
        .iter()
        .filter_map(|v| v.barcode.as_deref())
        .map(Criterion::Barcode);

    by_id
        .into_iter()
        .chain(by_sku)
        .chain(by_barcode)
        .find_map(|criterion| find(snapshot, &criterion).product().and_then(|p| p.id))
}
