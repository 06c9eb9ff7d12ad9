//! Domain types and configuration shared by the Pulse crates.

pub mod app_config;
pub mod config;
pub mod groups;
pub mod records;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use groups::{is_reserved_group_name, load_groups, Group, GroupDraft, GroupsFile, ALL_DATA};
pub use records::{ContentRecord, Metrics, RawRecord, Sentiment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read groups file {path}: {source}")]
    GroupsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse groups file: {0}")]
    GroupsFileParse(#[from] serde_yaml::Error),

    #[error("groups file validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid sentiment: {0}")]
    InvalidSentiment(String),

    #[error("invalid group: {0}")]
    InvalidGroup(String),
}
