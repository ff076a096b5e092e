use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LabcardError {
    #[error("no test result with id '{id}'")]
    NotFound { id: String },

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LabcardError {
    /// True for the unknown-id case, which shells treat as a no-op.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LabcardError::NotFound { .. })
    }
}
