//! Best-effort Slack notifications.
//!
//! Delivery is fire-and-forget: failures are logged at warn level and never
//! propagated, so a broken webhook can never take down a run. Skipped
//! silently when no webhook is configured.

use std::time::Duration;

use reqwest::Client;
use tracing::warn;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts plain-text run summaries to a Slack incoming webhook.
pub struct Notifier {
    http: Client,
    webhook_url: Option<String>,
}

impl Notifier {
    /// Build a notifier; pass None to disable alerting.
    pub fn new(webhook_url: Option<String>) -> Self {
        Self { http: Client::new(), webhook_url }
    }

    /// Post a message. Infallible by design; see module docs.
    pub async fn send(&self, message: &str) {
        let Some(url) = &self.webhook_url else {
            return;
        };
        let result = self
            .http
            .post(url)
            .timeout(NOTIFY_TIMEOUT)
            .json(&serde_json::json!({ "text": message }))
            .send()
            .await;
        match result {
            Ok(resp) if !resp.status().is_success() => {
                warn!("[Notify] Slack webhook returned {}", resp.status());
            }
            Ok(_) => {}
            Err(e) => warn!("[Notify] Failed to send Slack notification: {e}"),
        }
    }
}
