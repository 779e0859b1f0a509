use super::*;

#[test]
fn base_url_gets_single_trailing_slash() {
    let client = ShopifyAdminClient::new(
        "https://shop.example.com/admin/api/2023-01",
        None,
        5,
        "catsync-test/0.1",
    )
    .unwrap();
    assert_eq!(
        client.base_url().as_str(),
        "https://shop.example.com/admin/api/2023-01/"
    );
}

#[test]
fn base_url_collapses_repeated_trailing_slashes() {
    let client = ShopifyAdminClient::new(
        "https://shop.example.com/admin/api/2023-01//",
        None,
        5,
        "catsync-test/0.1",
    )
    .unwrap();
    assert_eq!(
        client.base_url().as_str(),
        "https://shop.example.com/admin/api/2023-01/"
    );
}

#[test]
fn endpoint_joins_below_api_version() {
    let base = url::parse_base_url("https://shop.example.com/admin/api/2023-01").unwrap();
    let joined = url::endpoint(&base, "products/42/images.json").unwrap();
    assert_eq!(
        joined.as_str(),
        "https://shop.example.com/admin/api/2023-01/products/42/images.json"
    );
}

#[test]
fn rejects_non_http_store_url() {
    let result = ShopifyAdminClient::new("not-a-url", None, 5, "catsync-test/0.1");
    assert!(matches!(
        result,
        Err(StoreError::InvalidStoreUrl { ref store_url, .. }) if store_url == "not-a-url"
    ));
}

#[test]
fn rejects_token_with_newline() {
    let result = ShopifyAdminClient::new(
        "https://shop.example.com/admin/api/2023-01",
        Some("bad\ntoken"),
        5,
        "catsync-test/0.1",
    );
    assert!(matches!(result, Err(StoreError::InvalidAccessToken(_))));
}

#[test]
fn extract_domain_returns_host() {
    let base = url::parse_base_url("https://shop.example.com/admin/api/2023-01").unwrap();
    assert_eq!(url::extract_domain(&base), "shop.example.com");
}
