//! Mautic source enumerator.
//!
//! Pages through `/api/contacts` at increasing offsets with ascending-ID
//! ordering, extracts the `hubspot_contact_id` cross-reference from each
//! contact's field container, and emits one deduplicated [`SyncPair`] per
//! qualifying record. Any non-200 page aborts the whole run.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{info, warn};

use crosslink_types::error::MauticError;
use crosslink_types::models::{ContactsPage, MauticContact, SyncConfig, SyncPair};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only client for the Mautic contacts API.
pub struct MauticClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
    page_size: usize,
}

impl MauticClient {
    /// Build a client from the run configuration.
    pub fn new(config: &SyncConfig) -> Result<Self, MauticError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(MauticError::request)?;
        Ok(Self {
            http,
            base_url: config.mautic_base_url.clone(),
            username: config.mautic_username.clone(),
            password: config.mautic_password.clone(),
            page_size: config.page_size,
        })
    }

    /// Fetch one page of contacts at the given offset.
    async fn fetch_page(&self, start: usize, since_minutes: u32) -> Result<ContactsPage, MauticError> {
        let mut request = self
            .http
            .get(format!("{}/api/contacts", self.base_url))
            .basic_auth(&self.username, Some(&self.password))
            .query(&[
                ("limit", self.page_size.to_string()),
                ("start", start.to_string()),
                ("orderBy", "id".to_string()),
                ("orderByDir", "ASC".to_string()),
            ]);
        if since_minutes > 0 {
            request = request.query(&[("search", format!("dateModified:>=-{since_minutes}minutes"))]);
        }

        let resp = request.send().await.map_err(MauticError::request)?;
        if resp.status() != StatusCode::OK {
            return Err(MauticError::ApiStatus { status: resp.status().as_u16() });
        }
        resp.json::<ContactsPage>().await.map_err(MauticError::invalid_response)
    }

    /// Enumerate all contacts in the modification window and produce the
    /// deduplicated set of sync pairs, ordered by Mautic ID ascending.
    ///
    /// Contacts without a `hubspot_contact_id`, or with a blank one, are
    /// skipped. A per-run seen-set guards against overlapping pages ever
    /// emitting the same contact twice.
    pub async fn enumerate_pairs(&self, since_minutes: u32) -> Result<Vec<SyncPair>, MauticError> {
        if since_minutes > 0 {
            info!("[Mautic] Incremental mode: fetching contacts modified in last {since_minutes} minutes");
        } else {
            info!("[Mautic] Full scan mode: fetching all contacts");
        }

        let mut pairs: Vec<SyncPair> = Vec::new();
        let mut seen: HashSet<i64> = HashSet::new();
        let mut start = 0_usize;

        loop {
            let page = self.fetch_page(start, since_minutes).await?;
            if page.is_empty() {
                break;
            }
            let page_len = page.len();

            // The contacts object is keyed by ID; deserialization loses the
            // response ordering, so re-sort to keep output deterministic.
            let mut records: Vec<(i64, MauticContact)> = Vec::with_capacity(page_len);
            for (key, contact) in page.contacts {
                match key.parse::<i64>() {
                    Ok(id) => records.push((id, contact)),
                    Err(_) => warn!("[Mautic] Skipping contact with non-numeric id {key:?}"),
                }
            }
            records.sort_unstable_by_key(|(id, _)| *id);

            for (mautic_id, contact) in records {
                if !seen.insert(mautic_id) {
                    continue;
                }
                let Some(hubspot_id) = contact.hubspot_contact_id() else {
                    continue;
                };
                if let Some(pair) = SyncPair::new(mautic_id, &hubspot_id) {
                    pairs.push(pair);
                }
            }

            start += self.page_size;
            if page_len < self.page_size {
                break;
            }
            if start % 1000 == 0 {
                info!("[Mautic] Scanned {start} contacts, found {} with HubSpot IDs", pairs.len());
            }
        }

        info!("[Mautic] Found {} contacts with hubspot_contact_id", pairs.len());
        Ok(pairs)
    }
}
