use thiserror::Error;
use vendora_core::CatalogError;

#[derive(Debug, Error)]
pub enum MatchError {
    /// The request was rejected before any catalog access.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The catalog could not be read. Never reported as an empty result.
    #[error("vendor retrieval failed: {0}")]
    RetrievalFailure(#[from] CatalogError),
}

impl MatchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    /// Stable machine-readable code for API error bodies.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::InvalidRequest(_) => "validation_error",
            MatchError::RetrievalFailure(_) => "retrieval_failure",
        }
    }
}
