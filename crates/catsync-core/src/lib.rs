pub mod app_config;
pub mod catalog;
pub mod config;
pub mod size_chart;
pub mod updates;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    format_tags, is_unset_barcode, parse_tags, LocalImage, Product, ProductOption, RemoteImage,
    Variant,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use size_chart::{load_size_chart, SizeChart, SizeEntry, SizeGroup};
pub use updates::{ImageUpdate, NewImage, ProductUpdate, VariantPosition, VariantUpdate};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read size chart {path}: {source}")]
    SizeChartIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse size chart {path}: {reason}")]
    SizeChartParse { path: String, reason: String },

    #[error("config validation failed: {0}")]
    Validation(String),
}
