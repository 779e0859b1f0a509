pub mod api;
pub mod client;
pub mod error;
pub mod normalize;
mod payload;
pub mod types;

pub use api::StoreApi;
pub use client::ShopifyAdminClient;
pub use error::StoreError;
pub use normalize::normalize_product;
