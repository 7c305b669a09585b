use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid {name}: {value} (must be a non-negative number)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Unknown distance function: {0} (expected sift3 or sift4)")]
    UnknownDistance(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
