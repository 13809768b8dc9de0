/// Domain-level outcomes that are not storage failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A filter matched zero records. Carries the human-readable message.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client input was missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),
}
