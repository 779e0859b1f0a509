use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Admin API base, e.g. `https://shop.myshopify.com/admin/api/2023-01`.
    pub store_url: String,
    pub store_access_token: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub size_chart_path: PathBuf,
    pub cache_path: PathBuf,
    /// Write barcode diffs instead of only logging them.
    pub apply_barcode_updates: bool,
    /// Drop duplicate variant ids when re-associating an existing image.
    pub dedupe_image_variant_ids: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("store_url", &self.store_url)
            .field(
                "store_access_token",
                &self.store_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("size_chart_path", &self.size_chart_path)
            .field("cache_path", &self.cache_path)
            .field("apply_barcode_updates", &self.apply_barcode_updates)
            .field("dedupe_image_variant_ids", &self.dedupe_image_variant_ids)
            .finish()
    }
}
