use thiserror::Error;
use serde_json::Error as JsonError;
use std::io::Error as IoError;
use toml::de::Error as TomlError;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Config parse error: {0}")]
    Toml(#[from] TomlError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] JsonError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
