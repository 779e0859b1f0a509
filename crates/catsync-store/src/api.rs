//! The store seam consumed by the reconciler.

use catsync_core::{
    ImageUpdate, NewImage, Product, ProductUpdate, RemoteImage, Variant, VariantUpdate,
};

use crate::error::StoreError;

/// Operations the reconciler needs from the remote store.
///
/// Every call is a single request/response. `Ok` carries the parsed, non-empty
/// response body; any failure (transport, status, empty body) is an `Err`.
/// Callers await one call at a time.
#[allow(async_fn_in_trait)]
pub trait StoreApi {
    /// Creates a product with its options, variants and tags.
    async fn create_product(&self, product: &Product) -> Result<Product, StoreError>;

    async fn get_product(&self, product_id: i64) -> Result<Product, StoreError>;

    async fn update_product(
        &self,
        product_id: i64,
        update: &ProductUpdate,
    ) -> Result<Product, StoreError>;

    async fn create_variant(
        &self,
        product_id: i64,
        variant: &Variant,
    ) -> Result<Variant, StoreError>;

    async fn update_variant(&self, update: &VariantUpdate) -> Result<Variant, StoreError>;

    async fn get_images(&self, product_id: i64) -> Result<Vec<RemoteImage>, StoreError>;

    async fn create_image(
        &self,
        product_id: i64,
        image: &NewImage,
    ) -> Result<RemoteImage, StoreError>;

    async fn update_image(
        &self,
        product_id: i64,
        update: &ImageUpdate,
    ) -> Result<RemoteImage, StoreError>;

    async fn get_all_products(&self) -> Result<Vec<Product>, StoreError>;
}
