use thiserror::Error;

/// Errors surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A caller-supplied precondition was violated (empty required name,
    /// negative amount). Recoverable: the presentation layer should reject
    /// the input and re-prompt rather than retry the call.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// Statement preparation, execution, or connection failure. Treated as
    /// unrecoverable; carries the engine's diagnostic message.
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}
