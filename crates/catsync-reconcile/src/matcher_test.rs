use super::*;
use crate::fixtures::{product, variant};

fn with_codes(id: i64, sku: &str, barcode: Option<&str>) -> catsync_core::Variant {
    let mut v = variant(Some(id), "Black", "9", "10.00");
    v.sku = Some(sku.to_string());
    v.barcode = barcode.map(str::to_string);
    v
}

fn snapshot() -> Vec<Product> {
    vec![
        product(Some(1), "", vec![with_codes(11, "A-1", Some("0001")), with_codes(12, "A-2", None)]),
        product(Some(2), "", vec![with_codes(21, "B-1", Some("None")), with_codes(22, "A-1", Some("0001"))]),
    ]
}

#[test]
fn finds_product_by_id() {
    let snap = snapshot();
    let found = find(&snap, &Criterion::ProductId(2));
    assert_eq!(found.product().and_then(|p| p.id), Some(2));
    assert!(found.variant().is_none());
}

#[test]
fn missing_id_is_not_found_not_error() {
    let snap = snapshot();
    assert_eq!(find(&snap, &Criterion::ProductId(99)), Lookup::NotFound);
    assert!(!find(&snap, &Criterion::ProductId(99)).is_found());
}

#[test]
fn first_sku_match_in_snapshot_order_wins() {
    let snap = snapshot();
    let found = find(&snap, &Criterion::Sku("A-1"));
    assert_eq!(found.variant().and_then(|v| v.id), Some(11));
    assert_eq!(found.product().and_then(|p| p.id), Some(1));
}

#[test]
fn first_barcode_match_wins() {
    let snap = snapshot();
    let found = find(&snap, &Criterion::Barcode(" 0001 "));
    assert_eq!(found.variant().and_then(|v| v.id), Some(11));
}

#[test]
fn unset_barcodes_never_match() {
    let snap = snapshot();
    assert_eq!(find(&snap, &Criterion::Barcode("None")), Lookup::NotFound);
    assert_eq!(find(&snap, &Criterion::Barcode("")), Lookup::NotFound);
}

#[test]
fn blank_sku_never_matches() {
    let snap = snapshot();
    assert_eq!(find(&snap, &Criterion::Sku("  ")), Lookup::NotFound);
}

#[test]
fn empty_snapshot_is_not_found() {
    assert_eq!(find(&[], &Criterion::Sku("A-1")), Lookup::NotFound);
}

#[test]
fn option_tuple_match_is_scoped_to_one_product() {
    let remote = product(
        Some(1),
        "",
        vec![
            variant(Some(11), "Black", "9", "10.00"),
            variant(Some(12), "Black", "10", "10.00"),
        ],
    );
    let wanted = variant(None, " Black", "10 ", "12.00");
    let found = find_by_options(&remote, &wanted);
    assert_eq!(found.variant().and_then(|v| v.id), Some(12));

    let absent = variant(None, "White", "10", "12.00");
    assert_eq!(find_by_options(&remote, &absent), Lookup::NotFound);
}

#[test]
fn two_axis_candidate_matches_three_axis_remote() {
    let mut remote_variant = variant(Some(11), "Black", "9", "10.00");
    remote_variant.option3 = Some("Wide".to_string());
    let remote = product(Some(1), "", vec![remote_variant]);

    let wanted = variant(None, "Black", "9", "10.00");
    assert!(find_by_options(&remote, &wanted).is_found());

    let mut narrow = wanted.clone();
    narrow.option3 = Some("Narrow".to_string());
    assert!(!find_by_options(&remote, &narrow).is_found());
}

#[test]
fn all_option3_variants_match_a_two_axis_candidate() {
    let wide = Variant {
        option3: Some("Wide".to_string()),
        ..variant(Some(11), "Black", "9", "10.00")
    };
    let narrow = Variant {
        option3: Some("Narrow".to_string()),
        ..variant(Some(12), "Black", "9", "10.00")
    };
    let remote = product(
        Some(1),
        "",
        vec![wide, variant(Some(13), "Black", "10", "10.00"), narrow],
    );

    let wanted = variant(None, "Black", "9", "10.00");
    let ids: Vec<Option<i64>> = variants_matching_options(&remote, &wanted)
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![Some(11), Some(12)]);

    let mut exact = wanted.clone();
    exact.option3 = Some("Narrow".to_string());
    assert_eq!(variants_matching_options(&remote, &exact).len(), 1);
    assert!(variants_matching_options(&remote, &variant(None, "White", "9", "1")).is_empty());
}
