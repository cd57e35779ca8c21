use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of restaurant records, found {found}")]
    NotAnArray { found: &'static str },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
