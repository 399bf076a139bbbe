//! HubSpot destination client.
//!
//! Three responsibilities against the CRM v3 API:
//!
//! - **Property bootstrap** (pre-flight): the `mautic_contact_id` contact
//!   property must exist before any write; created with a fixed schema when
//!   the lookup 404s. Any other failure aborts the run.
//! - **Existing-value prober**: batch-reads current property values so the
//!   delta filter can drop already-synced records. Advisory only; a failed
//!   batch degrades to "treat as unsynced" and never aborts.
//! - **Batched writer**: batch-updates the property with per-item
//!   success/failure accounting. A hard batch failure counts every record in
//!   the batch as failed; the run continues with the next batch.
//!
//! Every batch request is followed by a fixed sleep to stay under HubSpot's
//! 100-requests-per-10-seconds ceiling, success or not.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;
use tracing::{error, info, warn};

use crosslink_types::error::HubSpotError;
use crosslink_types::models::{
    BatchReadRequest, BatchReadResponse, BatchRecord, BatchUpdateInput, BatchUpdateRequest,
    BatchUpdateResponse, ExistingValueMap, PropertyDefinition, SyncConfig, SyncPair,
    MAUTIC_ID_PROPERTY,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the HubSpot CRM v3 contacts API.
pub struct HubSpotClient {
    http: Client,
    base_url: String,
    token: String,
    batch_size: usize,
    rate_limit_delay: Duration,
}

impl HubSpotClient {
    /// Build a client from the run configuration.
    pub fn new(config: &SyncConfig) -> Result<Self, HubSpotError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(HubSpotError::request)?;
        Ok(Self {
            http,
            base_url: config.hubspot_base_url.clone(),
            token: config.hubspot_token.clone(),
            batch_size: config.batch_size,
            rate_limit_delay: config.rate_limit_delay,
        })
    }

    /// Verify the `mautic_contact_id` property exists, creating it on 404.
    ///
    /// Runs once per invocation before any sync work.
    pub async fn ensure_property(&self) -> Result<(), HubSpotError> {
        let resp = self
            .http
            .get(format!("{}/crm/v3/properties/contacts/{MAUTIC_ID_PROPERTY}", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(HubSpotError::request)?;

        match resp.status() {
            StatusCode::OK => {
                info!("[HubSpot] Property {MAUTIC_ID_PROPERTY} already exists");
                Ok(())
            }
            StatusCode::NOT_FOUND => self.create_property().await,
            status => Err(HubSpotError::PropertyLookup { status: status.as_u16() }),
        }
    }

    async fn create_property(&self) -> Result<(), HubSpotError> {
        let resp = self
            .http
            .post(format!("{}/crm/v3/properties/contacts", self.base_url))
            .bearer_auth(&self.token)
            .json(&PropertyDefinition::mautic_contact_id())
            .send()
            .await
            .map_err(HubSpotError::request)?;

        if resp.status() == StatusCode::CREATED {
            info!("[HubSpot] Created property {MAUTIC_ID_PROPERTY}");
            return Ok(());
        }
        let status = resp.status().as_u16();
        let body = truncate(&resp.text().await.unwrap_or_default(), 200);
        Err(HubSpotError::PropertyCreate { status, body })
    }

    /// Batch-read current `mautic_contact_id` values for the given contacts.
    ///
    /// Fail-open: contacts absent from a response, and every contact of a
    /// batch that fails outright, map to None ("needs sync").
    pub async fn existing_values(&self, ids: &[String]) -> ExistingValueMap {
        let mut map = ExistingValueMap::new();

        for batch in ids.chunks(self.batch_size) {
            match self.read_batch(batch).await {
                Some(records) => {
                    for record in records {
                        let value = record.mautic_contact_id();
                        map.insert(record.id, value);
                    }
                }
                None => {
                    for id in batch {
                        map.insert(id.clone(), None);
                    }
                }
            }
            sleep(self.rate_limit_delay).await;
        }

        map
    }

    async fn read_batch(&self, batch: &[String]) -> Option<Vec<BatchRecord>> {
        let resp = match self
            .http
            .post(format!("{}/crm/v3/objects/contacts/batch/read", self.base_url))
            .bearer_auth(&self.token)
            .json(&BatchReadRequest::mautic_ids(batch))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("[HubSpot] Batch read request failed: {e}");
                return None;
            }
        };

        let status = resp.status();
        if status != StatusCode::OK && status != StatusCode::MULTI_STATUS {
            warn!("[HubSpot] Batch read failed ({})", status.as_u16());
            return None;
        }
        match resp.json::<BatchReadResponse>().await {
            Ok(body) => Some(body.results),
            Err(e) => {
                warn!("[HubSpot] Batch read decode failed: {e}");
                None
            }
        }
    }

    /// Write every pair's Mautic ID into its HubSpot contact, in batches.
    ///
    /// Returns (success, failed) counts for the whole run. Per-item errors in
    /// a 200/207 response are counted from the `errors` array; any other
    /// status fails the entire batch. No retries.
    pub async fn write_pairs(&self, pairs: &[SyncPair]) -> (usize, usize) {
        let mut success = 0_usize;
        let mut failed = 0_usize;

        for batch in pairs.chunks(self.batch_size) {
            match self.update_batch(batch).await {
                Some(resp) => {
                    if !resp.errors.is_empty() {
                        warn!(
                            "[HubSpot] Batch partial failure: {} ok, {} errors",
                            resp.results.len(),
                            resp.errors.len()
                        );
                    }
                    success += resp.results.len();
                    failed += resp.errors.len();
                }
                None => {
                    failed += batch.len();
                }
            }
            sleep(self.rate_limit_delay).await;
        }

        (success, failed)
    }

    async fn update_batch(&self, batch: &[SyncPair]) -> Option<BatchUpdateResponse> {
        let request = BatchUpdateRequest {
            inputs: batch
                .iter()
                .map(|pair| BatchUpdateInput::mautic_id(&pair.hubspot_id, pair.mautic_id))
                .collect(),
        };

        let resp = match self
            .http
            .post(format!("{}/crm/v3/objects/contacts/batch/update", self.base_url))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                error!("[HubSpot] Batch update request failed: {e}");
                return None;
            }
        };

        let status = resp.status();
        if status != StatusCode::OK && status != StatusCode::MULTI_STATUS {
            let body = truncate(&resp.text().await.unwrap_or_default(), 200);
            error!("[HubSpot] Batch update failed: {} {body}", status.as_u16());
            return None;
        }
        match resp.json::<BatchUpdateResponse>().await {
            Ok(body) => Some(body),
            Err(e) => {
                // Success cannot be confirmed, so the batch counts as failed.
                error!("[HubSpot] Batch update decode failed: {e}");
                None
            }
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
