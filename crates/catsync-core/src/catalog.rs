//! Catalog records shared by the store client and the reconciler.
//!
//! A [`Product`] is used for two things: the remote record as the store
//! reports it (ids populated), and the local candidate parsed from a supplier
//! feed (ids absent, images attached). The candidate is transient; it only
//! exists to compute deltas against the remote record.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Barcode sentinel written by older tooling when the field was empty.
const BARCODE_NONE_SENTINEL: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned product id. Absent on local candidates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    /// Rich-text (HTML) description, compared byte-for-byte.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default = "default_status")]
    pub status: String,
    /// Order is irrelevant; accepts either a JSON array or a comma-separated string.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<LocalImage>,
    /// Colour label of the candidate; used as alt text for uploaded images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Product {
    /// Store ids of all variants that have one, in listing order.
    #[must_use]
    pub fn variant_ids(&self) -> Vec<i64> {
        self.variants.iter().filter_map(|v| v.id).collect()
    }

    /// Values of the option at `index` (0-based), if the product has that axis.
    #[must_use]
    pub fn option_values(&self, index: usize) -> Option<&[String]> {
        self.options.get(index).map(|o| o.values.as_slice())
    }
}

fn default_status() -> String {
    "active".to_string()
}

/// A named attribute axis (size, colour, ...) with its display-ordered values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Store-assigned variant id. Absent on local candidates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub option1: String,
    #[serde(default)]
    pub option2: Option<String>,
    #[serde(default)]
    pub option3: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Variant {
    /// Value on option axis `axis` (0-based), trimmed.
    #[must_use]
    pub fn option(&self, axis: usize) -> Option<&str> {
        match axis {
            0 => Some(self.option1.trim()),
            1 => self.option2.as_deref().map(str::trim),
            2 => self.option3.as_deref().map(str::trim),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_unset_barcode(&self) -> bool {
        is_unset_barcode(self.barcode.as_deref())
    }

    /// Returns `true` when `other` carries the same option tuple as `self`.
    ///
    /// Values are compared after trimming surrounding whitespace. When `self`
    /// has no third option the third axis is not compared, so a two-axis
    /// candidate still matches a remote variant that carries a third value.
    #[must_use]
    pub fn same_options(&self, other: &Variant) -> bool {
        if self.option(0) != other.option(0) || self.option(1) != other.option(1) {
            return false;
        }
        match self.option(2) {
            Some(third) => other.option(2) == Some(third),
            None => true,
        }
    }
}

/// An image asset attached to a local candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalImage {
    /// Content hash; the store embeds it in the asset URL on upload.
    pub checksum: String,
    /// Raw image bytes, base64 encoded in JSON.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// An image as the store reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteImage {
    pub id: i64,
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub variant_ids: Vec<i64>,
}

/// Returns `true` when a barcode counts as unset: absent, blank, or the
/// literal `"None"` sentinel.
#[must_use]
pub fn is_unset_barcode(barcode: Option<&str>) -> bool {
    match barcode.map(str::trim) {
        None => true,
        Some(b) => b.is_empty() || b == BARCODE_NONE_SENTINEL,
    }
}

/// Splits a comma-separated tag string into a set, trimming whitespace and
/// dropping empty entries.
#[must_use]
pub fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Joins a tag set into the store's comma-separated wire form.
#[must_use]
pub fn format_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match RawTags::deserialize(deserializer)? {
        RawTags::Joined(raw) => parse_tags(&raw),
        RawTags::List(list) => list
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect(),
    })
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.trim())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn make_variant(option1: &str, option2: &str, option3: Option<&str>) -> Variant {
        Variant {
            id: None,
            option1: option1.to_string(),
            option2: Some(option2.to_string()),
            option3: option3.map(str::to_string),
            price: Decimal::from_str("19.99").unwrap(),
            barcode: None,
            sku: None,
            title: None,
        }
    }

    #[test]
    fn unset_barcode_covers_absent_empty_and_sentinel() {
        assert!(is_unset_barcode(None));
        assert!(is_unset_barcode(Some("")));
        assert!(is_unset_barcode(Some("  ")));
        assert!(is_unset_barcode(Some("None")));
        assert!(!is_unset_barcode(Some("0123456789012")));
        assert!(!is_unset_barcode(Some("none")));
    }

    #[test]
    fn parse_tags_trims_and_drops_empty() {
        let tags = parse_tags(" a, b ,,c ");
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn format_tags_joins_sorted() {
        let tags = parse_tags("b,a");
        assert_eq!(format_tags(&tags), "a, b");
    }

    #[test]
    fn same_options_compares_trimmed_tuples() {
        let local = make_variant("Black", " 10 ", None);
        let remote = make_variant("Black", "10", None);
        assert!(local.same_options(&remote));

        let other = make_variant("Black", "11", None);
        assert!(!local.same_options(&other));
    }

    #[test]
    fn same_options_skips_third_axis_when_local_has_none() {
        let local = make_variant("Black", "10", None);
        let remote = make_variant("Black", "10", Some("Wide"));
        assert!(local.same_options(&remote));
    }

    #[test]
    fn same_options_compares_third_axis_when_present() {
        let local = make_variant("Black", "10", Some("Wide"));
        assert!(local.same_options(&make_variant("Black", "10", Some("Wide"))));
        assert!(!local.same_options(&make_variant("Black", "10", Some("Narrow"))));
        assert!(!local.same_options(&make_variant("Black", "10", None)));
    }

    #[test]
    fn candidate_deserializes_comma_separated_tags() {
        let json = r#"{
            "title": "Trail Runner",
            "tags": "shoes, running,trail",
            "variants": [{"option1": "Black", "option2": "9", "price": "89.99"}]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.tags.len(), 3);
        assert!(product.tags.contains("running"));
        assert_eq!(product.status, "active");
        assert_eq!(
            product.variants[0].price,
            Decimal::from_str("89.99").unwrap()
        );
    }

    #[test]
    fn candidate_deserializes_tag_array() {
        let json = r#"{"title": "Trail Runner", "tags": ["b", " a "]}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.tags, parse_tags("a,b"));
    }

    #[test]
    fn local_image_data_is_base64_in_json() {
        let image = LocalImage {
            checksum: "abc123".to_string(),
            data: b"\x89PNG".to_vec(),
            file_name: "abc123.png".to_string(),
            color: None,
            featured: true,
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["data"], "iVBORw==");
        let decoded: LocalImage = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.data, image.data);
    }

    #[test]
    fn variant_ids_skips_unsaved_variants() {
        let mut saved = make_variant("Black", "9", None);
        saved.id = Some(42);
        let product = Product {
            id: Some(1),
            title: "Trail Runner".to_string(),
            description: String::new(),
            vendor: String::new(),
            status: default_status(),
            tags: BTreeSet::new(),
            options: Vec::new(),
            variants: vec![saved, make_variant("Black", "10", None)],
            images: Vec::new(),
            color: None,
        };
        assert_eq!(product.variant_ids(), vec![42]);
    }
}
