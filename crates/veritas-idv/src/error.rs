//! Errors for the IDV value types.

/// Errors raised at the conversion boundaries of the IDV types.
///
/// Operations on [`CollectedData`](crate::CollectedData) itself are total
/// and never fail.
#[derive(Debug, thiserror::Error)]
pub enum IdvError {
    #[error("invalid score: {0}")]
    InvalidScore(String),

    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
