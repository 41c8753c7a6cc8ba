//! Error types for the price printer.

use crate::config::ConfigError;

/// Main error type of the binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment configuration error: {0}")]
    EnvConfig(#[from] envy::Error),

    #[error("{0}")]
    Prism(#[from] prismswap::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
