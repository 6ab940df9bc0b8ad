//! Error types for terrain generation

use thiserror::Error;

/// Main error type for the generation pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid band catalog: {0}")]
    Catalog(String),

    #[error("invalid grid: {0}")]
    Grid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
