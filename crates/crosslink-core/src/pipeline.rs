//! Run composition.
//!
//! One invocation is a strictly sequential pass: property bootstrap →
//! source enumeration → (optional) existing-value probe and delta filter →
//! batched writes → report. No stage spawns tasks; every await is a network
//! boundary. Each run is independent and recomputes state fresh from both
//! systems, which makes overlapping invocations safe: they can only ever
//! fill in missing values, never conflict on set ones.

use tracing::info;

use crosslink_types::error::Result;
use crosslink_types::models::{RunReport, SyncConfig, MAUTIC_ID_PROPERTY};

use crate::filter::filter_unsynced;
use crate::hubspot::HubSpotClient;
use crate::mautic::MauticClient;

/// Per-run mode switches. The cron deployment uses the defaults.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Only consider contacts modified within the last N minutes; 0 scans all
    pub since_minutes: u32,
    /// Probe HubSpot for already-set values and skip them
    pub skip_existing: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self { since_minutes: 20, skip_existing: true }
    }
}

/// Execute one full reconciliation run.
///
/// Errors abort the run before any write: configuration of the HTTP clients,
/// the pre-flight property check, or a source read failure. Write failures
/// do not error; they are counted in the report and decide run status at
/// the call site.
pub async fn run_sync(config: &SyncConfig, options: &SyncOptions) -> Result<RunReport> {
    let hubspot = HubSpotClient::new(config)?;
    let mautic = MauticClient::new(config)?;

    hubspot.ensure_property().await?;

    let mut pairs = mautic.enumerate_pairs(options.since_minutes).await?;
    if pairs.is_empty() {
        info!("[Sync] Nothing to sync.");
        return Ok(RunReport::default());
    }

    let mut skipped_existing = 0;
    if options.skip_existing {
        info!("[Sync] Checking for existing {MAUTIC_ID_PROPERTY} values...");
        let ids: Vec<String> = pairs.iter().map(|p| p.hubspot_id.clone()).collect();
        let existing = hubspot.existing_values(&ids).await;
        let before = pairs.len();
        pairs = filter_unsynced(pairs, &existing);
        skipped_existing = before - pairs.len();
        info!(
            "[Sync] {skipped_existing} already have {MAUTIC_ID_PROPERTY}, {} remaining to sync",
            pairs.len()
        );
    }

    if pairs.is_empty() {
        info!("[Sync] Nothing to sync after filtering.");
        return Ok(RunReport { skipped_existing, ..Default::default() });
    }

    info!("[Sync] Syncing {} contacts...", pairs.len());
    let (success, failed) = hubspot.write_pairs(&pairs).await;
    info!("[Sync] Results: success={success}, failed={failed}, total={}", success + failed);

    Ok(RunReport { success, failed, skipped_existing })
}
