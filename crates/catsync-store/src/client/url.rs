//! Admin API base URL handling for the store client.

use reqwest::Url;

use crate::error::StoreError;

/// Parses the configured admin API base into a URL that ends in exactly one
/// slash, so relative endpoint paths join onto it instead of replacing the
/// last segment.
///
/// `"https://shop.myshopify.com/admin/api/2023-01"` and
/// `"https://shop.myshopify.com/admin/api/2023-01/"` both become
/// `"https://shop.myshopify.com/admin/api/2023-01/"`.
pub(super) fn parse_base_url(store_url: &str) -> Result<Url, StoreError> {
    let normalised = format!("{}/", store_url.trim().trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| StoreError::InvalidStoreUrl {
        store_url: store_url.to_owned(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(StoreError::InvalidStoreUrl {
            store_url: store_url.to_owned(),
            reason: "expected an http(s) base URL".to_string(),
        });
    }

    Ok(url)
}

/// Joins an endpoint path (no leading slash) onto the base.
pub(super) fn endpoint(base: &Url, path: &str) -> Result<Url, StoreError> {
    base.join(path).map_err(|e| StoreError::InvalidStoreUrl {
        store_url: base.to_string(),
        reason: format!("cannot join \"{path}\": {e}"),
    })
}

/// Extracts the hostname for log fields. Falls back to the full URL.
pub(super) fn extract_domain(base: &Url) -> String {
    base.host_str()
        .map_or_else(|| base.to_string(), str::to_owned)
}
