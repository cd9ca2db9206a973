//! Shared domain types and configuration for the vendor matching workspace.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod geo;
pub mod matching_config;
pub mod search;
pub mod service;
pub mod text;
pub mod vendor;

pub use app_config::{AppConfig, Environment};
pub use catalog::{CatalogError, CatalogQuery, VendorCatalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{BoundingBox, Coordinate};
pub use matching_config::{load_matching_config, AdjacencyList, MatchingConfig, Thresholds};
pub use search::{BudgetRange, SearchRequest, SortMode};
pub use service::{ServiceTag, DEFAULT_ALIASES};
pub use text::normalize_text;
pub use vendor::{load_vendor_catalog, PriceRange, VendorDisplay, VendorRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lon}): {reason}")]
    InvalidCoordinate { lat: f64, lon: f64, reason: String },
    #[error("invalid sort mode: {0}")]
    InvalidSortMode(String),
    #[error("invalid service tag: {0}")]
    InvalidServiceTag(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
