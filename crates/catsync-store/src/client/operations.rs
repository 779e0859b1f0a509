//! [`StoreApi`] operations for `ShopifyAdminClient`.

use catsync_core::{
    ImageUpdate, NewImage, Product, ProductUpdate, RemoteImage, Variant, VariantUpdate,
};
use reqwest::Method;

use crate::api::StoreApi;
use crate::error::StoreError;
use crate::normalize::{normalize_image, normalize_product, normalize_variant};
use crate::payload::{
    image_update_payload, new_image_payload, new_product_payload, product_update_payload,
    variant_payload, variant_update_payload, ImageBody, ProductBody, VariantBody,
};
use crate::types::{
    ImageEnvelope, ImagesEnvelope, ProductEnvelope, ProductsEnvelope, VariantEnvelope,
};

use super::{ShopifyAdminClient, PRODUCT_LIST_LIMIT};

impl StoreApi for ShopifyAdminClient {
    async fn create_product(&self, product: &Product) -> Result<Product, StoreError> {
        let body = ProductBody {
            product: new_product_payload(product),
        };
        let envelope: ProductEnvelope = self
            .send_json(Method::POST, "products.json", &body, "create product")
            .await?;
        normalize_product(envelope.product)
    }

    async fn get_product(&self, product_id: i64) -> Result<Product, StoreError> {
        let envelope: ProductEnvelope = self
            .get_json(
                &format!("products/{product_id}.json"),
                &format!("product {product_id}"),
            )
            .await?;
        normalize_product(envelope.product)
    }

    async fn update_product(
        &self,
        product_id: i64,
        update: &ProductUpdate,
    ) -> Result<Product, StoreError> {
        let body = ProductBody {
            product: product_update_payload(product_id, update),
        };
        let envelope: ProductEnvelope = self
            .send_json(
                Method::PUT,
                &format!("products/{product_id}.json"),
                &body,
                &format!("update product {product_id}"),
            )
            .await?;
        normalize_product(envelope.product)
    }

    async fn create_variant(
        &self,
        product_id: i64,
        variant: &Variant,
    ) -> Result<Variant, StoreError> {
        let body = VariantBody {
            variant: variant_payload(variant),
        };
        let envelope: VariantEnvelope = self
            .send_json(
                Method::POST,
                &format!("products/{product_id}/variants.json"),
                &body,
                &format!("create variant on product {product_id}"),
            )
            .await?;
        normalize_variant(envelope.variant, &product_id.to_string())
    }

    async fn update_variant(&self, update: &VariantUpdate) -> Result<Variant, StoreError> {
        let body = VariantBody {
            variant: variant_update_payload(update),
        };
        let envelope: VariantEnvelope = self
            .send_json(
                Method::PUT,
                &format!("variants/{}.json", update.id),
                &body,
                &format!("update variant {}", update.id),
            )
            .await?;
        normalize_variant(envelope.variant, "unknown")
    }

    async fn get_images(&self, product_id: i64) -> Result<Vec<RemoteImage>, StoreError> {
        let envelope: ImagesEnvelope = self
            .get_json(
                &format!("products/{product_id}/images.json"),
                &format!("images of product {product_id}"),
            )
            .await?;
        Ok(envelope.images.into_iter().map(normalize_image).collect())
    }

    async fn create_image(
        &self,
        product_id: i64,
        image: &NewImage,
    ) -> Result<RemoteImage, StoreError> {
        let body = ImageBody {
            image: new_image_payload(image),
        };
        let envelope: ImageEnvelope = self
            .send_json(
                Method::POST,
                &format!("products/{product_id}/images.json"),
                &body,
                &format!("upload image {} to product {product_id}", image.file_name),
            )
            .await?;
        Ok(normalize_image(envelope.image))
    }

    async fn update_image(
        &self,
        product_id: i64,
        update: &ImageUpdate,
    ) -> Result<RemoteImage, StoreError> {
        let body = ImageBody {
            image: image_update_payload(update),
        };
        let envelope: ImageEnvelope = self
            .send_json(
                Method::PUT,
                &format!("products/{product_id}/images/{}.json", update.image_id),
                &body,
                &format!("update image {} of product {product_id}", update.image_id),
            )
            .await?;
        Ok(normalize_image(envelope.image))
    }

    async fn get_all_products(&self) -> Result<Vec<Product>, StoreError> {
        let envelope: ProductsEnvelope = self
            .get_json(
                &format!("products.json?limit={PRODUCT_LIST_LIMIT}"),
                "product list",
            )
            .await?;
        envelope
            .products
            .into_iter()
            .map(normalize_product)
            .collect()
    }
}
