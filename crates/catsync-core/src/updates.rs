//! Update payloads produced by the reconciler.
//!
//! Each payload carries only the fields that changed. An empty payload means
//! no remote write is issued. The store crate turns these into wire JSON.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::catalog::ProductOption;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    /// Full reconciled tag set (union of remote and local).
    pub tags: Option<BTreeSet<String>>,
    pub description: Option<String>,
    /// Re-ordered option value lists.
    pub options: Option<Vec<ProductOption>>,
    /// Variant listing order, 1-based positions.
    pub variant_order: Option<Vec<VariantPosition>>,
}

impl ProductUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_none()
            && self.description.is_none()
            && self.options.is_none()
            && self.variant_order.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPosition {
    pub id: i64,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantUpdate {
    pub id: i64,
    pub price: Option<Decimal>,
    pub barcode: Option<String>,
}

impl VariantUpdate {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            price: None,
            barcode: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.barcode.is_none()
    }
}

/// A new image upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub file_name: String,
    pub alt: Option<String>,
    pub data: Vec<u8>,
    /// Variants to associate on creation; empty for non-featured images.
    pub variant_ids: Vec<i64>,
}

/// Re-association of an existing image with a new variant id list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpdate {
    pub image_id: i64,
    pub variant_ids: Vec<i64>,
}
