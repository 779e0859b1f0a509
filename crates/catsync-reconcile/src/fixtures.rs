//! Record builders shared by unit tests.

use std::str::FromStr;

use catsync_core::{parse_tags, LocalImage, Product, ProductOption, RemoteImage, Variant};
use rust_decimal::Decimal;

pub(crate) fn price(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap()
}

pub(crate) fn variant(id: Option<i64>, option1: &str, option2: &str, price_raw: &str) -> Variant {
    Variant {
        id,
        option1: option1.to_string(),
        option2: Some(option2.to_string()),
        option3: None,
        price: price(price_raw),
        barcode: None,
        sku: None,
        title: None,
    }
}

pub(crate) fn option(name: &str, position: u32, values: &[&str]) -> ProductOption {
    ProductOption {
        id: None,
        name: name.to_string(),
        position,
        values: values.iter().map(|v| (*v).to_string()).collect(),
    }
}

pub(crate) fn product(id: Option<i64>, tags: &str, variants: Vec<Variant>) -> Product {
    Product {
        id,
        title: "Trail Runner".to_string(),
        description: "<p>Grippy.</p>".to_string(),
        vendor: "Acme".to_string(),
        status: "active".to_string(),
        tags: parse_tags(tags),
        options: Vec::new(),
        variants,
        images: Vec::new(),
        color: Some("Black".to_string()),
    }
}

pub(crate) fn local_image(checksum: &str, featured: bool) -> LocalImage {
    LocalImage {
        checksum: checksum.to_string(),
        data: b"img".to_vec(),
        file_name: format!("{checksum}.jpg"),
        color: None,
        featured,
    }
}

pub(crate) fn remote_image(id: i64, src: &str, variant_ids: &[i64]) -> RemoteImage {
    RemoteImage {
        id,
        src: src.to_string(),
        alt: None,
        variant_ids: variant_ids.to_vec(),
    }
}
