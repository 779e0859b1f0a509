//! Normalization from admin API wire types to [`catsync_core`] catalog records.

use std::str::FromStr;

use catsync_core::{parse_tags, Product, ProductOption, RemoteImage, Variant};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::types::{ShopifyImage, ShopifyOption, ShopifyProduct, ShopifyVariant};

/// Normalizes a raw [`ShopifyProduct`] into a [`Product`].
///
/// # Errors
///
/// Returns [`StoreError::Normalization`] if any variant price is not a decimal.
pub fn normalize_product(product: ShopifyProduct) -> Result<Product, StoreError> {
    let product_id = product.id.to_string();

    let variants = product
        .variants
        .into_iter()
        .map(|v| normalize_variant(v, &product_id))
        .collect::<Result<Vec<_>, _>>()?;

    let options = product
        .options
        .into_iter()
        .enumerate()
        .map(|(idx, o)| normalize_option(o, idx))
        .collect();

    Ok(Product {
        id: Some(product.id),
        title: product.title,
        description: product.body_html.unwrap_or_default(),
        vendor: product.vendor.unwrap_or_default(),
        status: product.status.unwrap_or_else(|| "active".to_string()),
        tags: parse_tags(&product.tags),
        options,
        variants,
        images: Vec::new(),
        color: None,
    })
}

/// Normalizes a raw [`ShopifyVariant`] into a [`Variant`].
///
/// # Errors
///
/// Returns [`StoreError::Normalization`] if the price is not a decimal.
pub fn normalize_variant(
    variant: ShopifyVariant,
    product_id: &str,
) -> Result<Variant, StoreError> {
    let price =
        Decimal::from_str(variant.price.trim()).map_err(|e| StoreError::Normalization {
            product_id: product_id.to_owned(),
            reason: format!(
                "variant {} has invalid price \"{}\": {e}",
                variant.id, variant.price
            ),
        })?;

    Ok(Variant {
        id: Some(variant.id),
        option1: variant.option1.unwrap_or_default(),
        option2: variant.option2,
        option3: variant.option3,
        price,
        barcode: variant.barcode,
        sku: variant.sku.filter(|s| !s.is_empty()),
        title: variant.title,
    })
}

#[must_use]
pub fn normalize_image(image: ShopifyImage) -> RemoteImage {
    RemoteImage {
        id: image.id,
        src: image.src,
        alt: image.alt,
        variant_ids: image.variant_ids,
    }
}

fn normalize_option(option: ShopifyOption, idx: usize) -> ProductOption {
    // Fall back to list order when the store omits positions.
    let position = option
        .position
        .unwrap_or_else(|| u32::try_from(idx + 1).unwrap_or(u32::MAX));
    ProductOption {
        id: option.id,
        name: option.name,
        position,
        values: option.values,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
