use thiserror::Error;

/// Errors surfaced by `transform` and the registry operations.
///
/// All are fail-fast: a transform either produces a complete result or
/// rejects the whole schema document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Input to `transform` is not a schema object.
    #[error("Expected a schema object, got {0}")]
    Precondition(String),

    /// The node's `type` names neither a schema kind nor a registered type.
    #[error("Unsupported json schema {0}")]
    Unsupported(String),

    /// The `format` keyword references an unregistered name.
    #[error("Missing format {0}, use the register_format API")]
    MissingFormat(String),

    /// The `pattern` keyword holds an uncompilable expression.
    #[error("Invalid pattern {0}")]
    InvalidPattern(String),

    #[error("Duplicated format {0}")]
    DuplicateFormat(String),

    #[error("Duplicated type {0}")]
    DuplicateType(String),

    /// Attempt to register a custom type under a schema kind name.
    #[error("Reserved type {0}")]
    ReservedName(String),
}
