use catsync_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("store call failed: {0}")]
    Store(#[from] StoreError),

    #[error("failed to access catalog cache {path}: {source}")]
    CacheIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog cache {path} is not a JSON array of products: {source}")]
    CacheParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to persist catalog cache {path}: {reason}")]
    CachePersist { path: String, reason: String },
}
