// src/error.rs

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),
    #[error("Duplicate investment id {0} in catalog")]
    DuplicateId(u32),
    #[error("Investment {id} failed validation: {source}")]
    InvalidRecord {
        id: u32,
        #[source]
        source: ValidationErrors,
    },
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
