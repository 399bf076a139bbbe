//! Runtime configuration.
//!
//! All configuration is read once at process start into an explicit
//! [`SyncConfig`] and passed by reference into each component. Nothing
//! reads the environment after startup.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// HubSpot private app token.
pub const ENV_HUBSPOT_TOKEN: &str = "HUBSPOT_PRIVATE_APP_ACCESS_TOKEN";
/// Mautic instance URL (e.g. `https://marketing.example.com`).
pub const ENV_MAUTIC_BASE_URL: &str = "MAUTIC_BASE_URL";
/// Mautic API username.
pub const ENV_MAUTIC_USERNAME: &str = "MAUTIC_USERNAME";
/// Mautic API password.
pub const ENV_MAUTIC_PASSWORD: &str = "MAUTIC_PASSWORD";
/// Optional Slack incoming webhook for failure/success alerts.
pub const ENV_SLACK_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";

/// Mautic contacts page size.
pub const DEFAULT_PAGE_SIZE: usize = 100;
/// HubSpot batch read/update ceiling.
pub const DEFAULT_BATCH_SIZE: usize = 100;
/// Post-batch delay: ~8 requests/sec to stay under HubSpot's 100/10s limit.
const RATE_LIMIT_DELAY_MS: u64 = 120;

/// Default HubSpot API origin.
pub const DEFAULT_HUBSPOT_BASE_URL: &str = "https://api.hubapi.com";

/// Credentials and tunables for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// HubSpot private app bearer token
    pub hubspot_token: String,
    /// HubSpot API origin (overridable for tests)
    pub hubspot_base_url: String,
    /// Mautic instance URL, no trailing slash
    pub mautic_base_url: String,
    /// Mautic basic-auth username
    pub mautic_username: String,
    /// Mautic basic-auth password
    pub mautic_password: String,
    /// Slack incoming webhook, if alerts are configured
    pub slack_webhook_url: Option<String>,
    /// Mautic contacts page size
    pub page_size: usize,
    /// HubSpot batch read/update size
    pub batch_size: usize,
    /// Fixed sleep after every HubSpot batch request
    pub rate_limit_delay: Duration,
}

impl SyncConfig {
    /// Build the configuration from environment variables.
    ///
    /// Required: [`ENV_HUBSPOT_TOKEN`], [`ENV_MAUTIC_BASE_URL`],
    /// [`ENV_MAUTIC_USERNAME`], [`ENV_MAUTIC_PASSWORD`].
    /// Optional: [`ENV_SLACK_WEBHOOK_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let hubspot_token = required_var(ENV_HUBSPOT_TOKEN)?;
        let mautic_base_url = required_var(ENV_MAUTIC_BASE_URL)?;
        let mautic_base_url = mautic_base_url.trim_end_matches('/').to_string();
        if Url::parse(&mautic_base_url).is_err() {
            return Err(ConfigError::InvalidUrl {
                name: ENV_MAUTIC_BASE_URL.to_string(),
                value: mautic_base_url,
            });
        }
        let mautic_username = required_var(ENV_MAUTIC_USERNAME)?;
        let mautic_password = required_var(ENV_MAUTIC_PASSWORD)?;
        let slack_webhook_url = optional_var(ENV_SLACK_WEBHOOK_URL);

        Ok(Self {
            hubspot_token,
            hubspot_base_url: DEFAULT_HUBSPOT_BASE_URL.to_string(),
            mautic_base_url,
            mautic_username,
            mautic_password,
            slack_webhook_url,
            page_size: DEFAULT_PAGE_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            rate_limit_delay: Duration::from_millis(RATE_LIMIT_DELAY_MS),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::missing(name)),
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
