//! Единый тип ошибок публичного API.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("The file {} does not exist.", path.display())]
    NotFound { path: PathBuf },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Cannot write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PricingError>;
