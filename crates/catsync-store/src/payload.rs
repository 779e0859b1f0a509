//! Request bodies for the admin REST API.
//!
//! This is the only place catalog records and update payloads are turned into
//! wire JSON. Optional fields are omitted rather than sent as `null`, so an
//! update only touches what the reconciler decided to change.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use catsync_core::{
    format_tags, ImageUpdate, NewImage, Product, ProductOption, ProductUpdate, Variant,
    VariantUpdate,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct ProductBody<T> {
    pub product: T,
}

#[derive(Debug, Serialize)]
pub(crate) struct VariantBody<T> {
    pub variant: T,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageBody<T> {
    pub image: T,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewProductPayload<'a> {
    pub title: &'a str,
    pub body_html: &'a str,
    pub vendor: &'a str,
    pub status: &'a str,
    pub options: Vec<OptionPayload<'a>>,
    pub variants: Vec<VariantPayload<'a>>,
    pub tags: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OptionPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub values: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct VariantPayload<'a> {
    pub option1: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<&'a str>,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductUpdatePayload<'a> {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionPayload<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantPositionPayload>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct VariantPositionPayload {
    pub id: i64,
    pub position: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct VariantUpdatePayload<'a> {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewImagePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<&'a str>,
    /// Base64 of the raw image bytes.
    pub attachment: String,
    pub filename: &'a str,
    #[serde(skip_serializing_if = "<[i64]>::is_empty")]
    pub variant_ids: &'a [i64],
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageUpdatePayload<'a> {
    pub id: i64,
    pub variant_ids: &'a [i64],
}

fn option_payload(option: &ProductOption) -> OptionPayload<'_> {
    OptionPayload {
        id: option.id,
        name: &option.name,
        position: (option.position > 0).then_some(option.position),
        values: &option.values,
    }
}

pub(crate) fn variant_payload(variant: &Variant) -> VariantPayload<'_> {
    VariantPayload {
        option1: &variant.option1,
        option2: variant.option2.as_deref(),
        option3: variant.option3.as_deref(),
        price: variant.price.to_string(),
        barcode: variant.barcode.as_deref(),
        sku: variant.sku.as_deref(),
    }
}

pub(crate) fn new_product_payload(product: &Product) -> NewProductPayload<'_> {
    NewProductPayload {
        title: &product.title,
        body_html: &product.description,
        vendor: &product.vendor,
        status: &product.status,
        options: product.options.iter().map(option_payload).collect(),
        variants: product.variants.iter().map(variant_payload).collect(),
        tags: format_tags(&product.tags),
    }
}

pub(crate) fn product_update_payload(
    product_id: i64,
    update: &ProductUpdate,
) -> ProductUpdatePayload<'_> {
    ProductUpdatePayload {
        id: product_id,
        tags: update.tags.as_ref().map(format_tags),
        body_html: update.description.as_deref(),
        options: update
            .options
            .as_ref()
            .map(|options| options.iter().map(option_payload).collect()),
        variants: update.variant_order.as_ref().map(|order| {
            order
                .iter()
                .map(|p| VariantPositionPayload {
                    id: p.id,
                    position: p.position,
                })
                .collect()
        }),
    }
}

pub(crate) fn variant_update_payload(update: &VariantUpdate) -> VariantUpdatePayload<'_> {
    VariantUpdatePayload {
        id: update.id,
        price: update.price.map(|p| p.to_string()),
        barcode: update.barcode.as_deref(),
    }
}

pub(crate) fn new_image_payload(image: &NewImage) -> NewImagePayload<'_> {
    NewImagePayload {
        alt: image.alt.as_deref(),
        attachment: STANDARD.encode(&image.data),
        filename: &image.file_name,
        variant_ids: &image.variant_ids,
    }
}

pub(crate) fn image_update_payload(update: &ImageUpdate) -> ImageUpdatePayload<'_> {
    ImageUpdatePayload {
        id: update.image_id,
        variant_ids: &update.variant_ids,
    }
}
