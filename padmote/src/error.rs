use std::fmt::Display;

/// Error produced by padmote wire-format operations.
///
/// Server- and transport-side conditions are not errors at this layer;
/// those are classified as data (see [`crate::TransportOutcome`]).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn custom(message: impl Display) -> Self {
        Self {
            kind: ErrorKind::Custom(message.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Json(err.to_string()),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
enum ErrorKind {
    #[error("{0}")]
    Custom(String),
    #[error("JSON error: {0}")]
    Json(String),
}
