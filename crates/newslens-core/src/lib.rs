//! Shared configuration for newslens: the process environment (`AppConfig`)
//! and the analysis taxonomy file (`Taxonomy`).

pub mod app_config;
pub mod config;
pub mod taxonomy;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use taxonomy::{
    load_taxonomy, load_taxonomy_or_builtin, CategoryConfig, FallbackSettings, SentimentSettings,
    Taxonomy, TaxonomyOrigin, TopicSettings,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read taxonomy file {path}: {source}")]
    TaxonomyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse taxonomy file: {0}")]
    TaxonomyFileParse(#[from] serde_yaml::Error),

    #[error("invalid taxonomy: {0}")]
    Validation(String),
}
