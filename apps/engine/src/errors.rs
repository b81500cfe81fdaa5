use thiserror::Error;

/// Engine-level error type.
///
/// Only fatal conditions surface here. The two non-fatal cases are handled
/// in place: unencodable characters are substituted by the sanitizer, and
/// degenerate arithmetic (zero rate, negative equity) propagates as ordinary
/// values. Anything that does reach this enum aborts the whole generation;
/// no partial document is ever offered.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    #[error("Render failure: {0}")]
    Render(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
