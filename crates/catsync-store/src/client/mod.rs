//! HTTP client for the store's admin REST API.

mod operations;
mod url;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Page size for `get_all_products`; only the first page is fetched.
pub(super) const PRODUCT_LIST_LIMIT: u32 = 250;

/// HTTP client for the admin REST API.
///
/// Maps 404 and other non-2xx responses, and 2xx responses with an empty
/// body, to typed errors. Requests are not retried.
pub struct ShopifyAdminClient {
    pub(super) client: Client,
    pub(super) base_url: Url,
}

impl ShopifyAdminClient {
    /// Creates a client for the admin API rooted at `store_url`.
    ///
    /// When `access_token` is set it is sent on every request as
    /// `X-Shopify-Access-Token` and marked sensitive.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidStoreUrl`] if `store_url` is not an http(s) URL.
    /// - [`StoreError::InvalidAccessToken`] if the token is not a valid header value.
    /// - [`StoreError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        store_url: &str,
        access_token: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StoreError> {
        let base_url = url::parse_base_url(store_url)?;

        let mut headers = HeaderMap::new();
        if let Some(token) = access_token {
            let mut value = HeaderValue::from_str(token)
                .map_err(|e| StoreError::InvalidAccessToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(ACCESS_TOKEN_HEADER, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL all endpoint paths are joined onto.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, StoreError> {
        self.request_json::<(), T>(Method::GET, path, None, context)
            .await
    }

    pub(super) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, StoreError> {
        self.request_json(method, path, Some(body), context).await
    }

    async fn request_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        context: &str,
    ) -> Result<T, StoreError> {
        let url = url::endpoint(&self.base_url, path)?;
        tracing::debug!(
            method = %method,
            domain = %url::extract_domain(&self.base_url),
            path,
            "store request"
        );

        let mut request = self
            .client
            .request(method, url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(StoreError::EmptyResponse {
                context: context.to_owned(),
            });
        }

        serde_json::from_str::<T>(&text).map_err(|e| StoreError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
