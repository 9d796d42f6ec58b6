//! Error types for quadcluster.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[cfg(feature = "toml")]
    #[error("TOML decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[cfg(feature = "toml")]
    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, QuadError>;
