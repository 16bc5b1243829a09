use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A caller mistake such as a key mismatch or an unknown filter value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A fault inside the catalog itself (worker panic, poisoned lock).
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
