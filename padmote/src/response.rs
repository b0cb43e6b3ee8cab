use serde::{Deserialize, Serialize};

/// HTTP status of a settled configuration request.
pub type Status = u16;

/// How the transport layer reported a settled submission.
///
/// The driver answers `/config` with a plain-text acknowledgement while
/// clients ask for a JSON response body, so transports routinely report an
/// exchange as failed that the driver in fact applied. Classification of a
/// raw outcome into the user-facing notification lives in
/// [`TransportOutcome::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    /// The exchange settled with a well-formed response.
    Success {
        /// The decoded response message.
        body: String,
    },
    /// The transport classified the exchange as failed.
    Failure {
        /// HTTP status, if a response arrived at all.
        status: Option<Status>,
        /// Raw response text, if a response arrived at all.
        body: Option<String>,
    },
}

impl TransportOutcome {
    /// Collapses the outcome into the one notification a submission ends in.
    ///
    /// A failure carrying HTTP status 200 is a masked success: the driver
    /// processed the record and answered with a body the transport could
    /// not decode. The 200 status is authoritative over the transport's own
    /// classification, and the failure's body becomes the success message.
    /// Every other failure collapses to the generic error notification with
    /// its status and body discarded.
    pub fn classify(self) -> Notification {
        match self {
            TransportOutcome::Success { body } => Notification::success(body),
            TransportOutcome::Failure {
                status: Some(200),
                body,
            } => Notification::success(body.unwrap_or_default()),
            TransportOutcome::Failure { .. } => Notification::failure(),
        }
    }
}

/// Severity of a [`Notification`].
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A (title, message, severity) triple for the notification surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// The successful outcome of a submission.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success!", message, Severity::Success)
    }

    /// The generic submission failure. Deliberately carries no detail.
    pub fn failure() -> Self {
        Self::new("Oops!", "Something went wrong.", Severity::Error)
    }

    /// A non-blocking advisory.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new("Non-critical error", message, Severity::Info)
    }
}
