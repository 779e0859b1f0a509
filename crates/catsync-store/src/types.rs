//! Admin REST API response types.
//!
//! ### Tags
//! The admin endpoints return tags as a **comma-separated string**
//! (`"shoes, running"`), unlike the storefront `products.json` which returns
//! an array. Normalization splits the string into a set.
//!
//! ### `barcode`
//! May be `null`, `""`, or the literal `"None"` on records written by older
//! tooling. All three mean "unset"; the raw value is passed through as-is and
//! interpreted by [`catsync_core::is_unset_barcode`].
//!
//! ### `price`
//! Always a decimal string (`"30.00"`). Parsed into `Decimal` during
//! normalization.
//!
//! ### `option2` / `option3`
//! `null` when the product has fewer option axes.

use serde::Deserialize;

/// `GET /products/{id}.json`, `POST /products.json`, `PUT /products/{id}.json`.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub product: ShopifyProduct,
}

/// `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductsEnvelope {
    pub products: Vec<ShopifyProduct>,
}

/// `POST /products/{id}/variants.json`, `PUT /variants/{id}.json`.
#[derive(Debug, Deserialize)]
pub struct VariantEnvelope {
    pub variant: ShopifyVariant,
}

/// `GET /products/{id}/images.json`.
#[derive(Debug, Deserialize)]
pub struct ImagesEnvelope {
    #[serde(default)]
    pub images: Vec<ShopifyImage>,
}

/// `POST /products/{id}/images.json`, `PUT /products/{id}/images/{image_id}.json`.
#[derive(Debug, Deserialize)]
pub struct ImageEnvelope {
    pub image: ShopifyImage,
}

#[derive(Debug, Deserialize)]
pub struct ShopifyProduct {
    pub id: i64,
    pub title: String,
    /// Raw HTML description. May be `null`.
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Comma-separated tag string. Empty string when no tags.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub options: Vec<ShopifyOption>,
    #[serde(default)]
    pub variants: Vec<ShopifyVariant>,
}

#[derive(Debug, Deserialize)]
pub struct ShopifyOption {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShopifyVariant {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub option1: Option<String>,
    #[serde(default)]
    pub option2: Option<String>,
    #[serde(default)]
    pub option3: Option<String>,
    /// Decimal string, e.g. `"30.00"`.
    pub price: String,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShopifyImage {
    pub id: i64,
    /// CDN URL; the uploaded file name (and so the checksum) is embedded in it.
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub variant_ids: Vec<i64>,
}
