use padmote::{
    Action, ConfigRecord, DeviceClass, Layout, Notification, TransportOutcome,
    markup::resolve_button,
};
use reqwest::{
    Url,
    header::{self, HeaderValue},
};

use crate::Notify;

/// The driver's configuration endpoint on its fixed local port.
pub const DEFAULT_ENDPOINT: &str = "https://localhost:9876/config";

/// Checks a platform description for one of the two supported families.
///
/// Returns the advisory notification for an unsupported-looking platform,
/// `None` otherwise. Best-effort only: submission proceeds either way, the
/// driver being the authority on what it can apply.
pub fn platform_advisory(platform: &str) -> Option<Notification> {
    let platform = platform.to_lowercase();
    if platform.contains("linux") || platform.contains("win") {
        None
    } else {
        Some(Notification::info(
            "Your platform doesn't seem to be supported.",
        ))
    }
}

/// Client for the padmote driver's configuration endpoint.
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    /// A client for the driver's default local endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is valid"))
    }

    /// A client for a nonstandard endpoint, e.g. a driver configured onto
    /// another port.
    pub fn with_endpoint(endpoint: Url) -> Self {
        // The driver serves HTTPS with a self-signed certificate.
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent("padmote-client/0.1.0")
            .default_headers(
                [(header::ACCEPT, HeaderValue::from_static("application/json"))]
                    .into_iter()
                    .collect(),
            )
            .build()
            .expect("client configuration is valid");

        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts one configuration record and reports how the exchange settled.
    ///
    /// The response body is requested as JSON. A 2xx reply whose body
    /// decodes maps to [`TransportOutcome::Success`], with a JSON string
    /// body unwrapped to its contents. A reply whose body does not decode,
    /// or with a non-2xx status, maps to [`TransportOutcome::Failure`]
    /// carrying the status and raw text; so does a network error, with
    /// whatever status it knows. Never fails: classification of failures
    /// back into successes is the caller's next step, see
    /// [`TransportOutcome::classify`].
    pub async fn submit(&self, record: &ConfigRecord) -> TransportOutcome {
        log::debug!(
            "POST {}: {} binding for button {:?}",
            self.endpoint,
            record.action.kind(),
            record.button
        );

        let rsp = match self
            .http
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await
        {
            Ok(rsp) => rsp,
            Err(err) => {
                log::debug!("transport error: {err}");
                return TransportOutcome::Failure {
                    status: err.status().map(|s| s.as_u16()),
                    body: None,
                };
            }
        };

        let status = rsp.status();
        let body = match rsp.text().await {
            Ok(body) => body,
            Err(err) => {
                log::debug!("response body unreadable: {err}");
                return TransportOutcome::Failure {
                    status: Some(status.as_u16()),
                    body: None,
                };
            }
        };

        if !status.is_success() {
            return TransportOutcome::Failure {
                status: Some(status.as_u16()),
                body: Some(body),
            };
        }

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(serde_json::Value::String(message)) => TransportOutcome::Success { body: message },
            Ok(_) => TransportOutcome::Success { body },
            // The expected response type is JSON; a body that does not
            // decode fails the exchange at this layer even on 2xx.
            Err(_) => TransportOutcome::Failure {
                status: Some(status.as_u16()),
                body: Some(body),
            },
        }
    }

    /// Assigns `action` to the button named in `markup` and notifies the
    /// outcome.
    ///
    /// This is the single submission path behind every per-action entry
    /// point: platform advisory, button resolution, record construction,
    /// POST, classification. The advisory never blocks the submission, and
    /// every path terminates in exactly one outcome notification; the
    /// notification is also returned for callers that branch on it.
    pub async fn configure(
        &self,
        notifier: &impl Notify,
        markup: &str,
        action: impl Into<Action>,
    ) -> Notification {
        if let Some(advisory) = platform_advisory(std::env::consts::OS) {
            notifier.notify(&advisory);
        }

        let record = ConfigRecord::new(
            DeviceClass::XboxOneGamepad,
            resolve_button(markup),
            action,
        );

        let notification = self.submit(&record).await.classify();
        notifier.notify(&notification);
        notification
    }

    /// Submits every binding of a layout in order, one record per binding.
    ///
    /// Bindings are independent: each settles and is notified on its own,
    /// with no retry and no rollback of earlier outcomes.
    pub async fn apply_layout(
        &self,
        notifier: &impl Notify,
        device: DeviceClass,
        layout: &Layout,
    ) -> Vec<Notification> {
        let mut outcomes = Vec::with_capacity(layout.len());
        for record in layout.records(device) {
            let notification = self.submit(&record).await.classify();
            notifier.notify(&notification);
            outcomes.push(notification);
        }
        outcomes
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
