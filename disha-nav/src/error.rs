//! Error types for DishaNav

use marga_map::MargaError;
use thiserror::Error;

/// DishaNav error type
#[derive(Error, Debug)]
pub enum DishaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Navigation error: {0}")]
    Nav(#[from] MargaError),
}

impl From<toml::de::Error> for DishaError {
    fn from(e: toml::de::Error) -> Self {
        DishaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DishaError>;
