//! Delta filter.
//!
//! Drops pairs whose HubSpot record already holds *some* non-empty
//! `mautic_contact_id`. Presence, not equality: once a value is set the
//! record is never overwritten, even if the Mautic side has since pointed
//! elsewhere (first write wins; the job runs on a high-frequency schedule
//! and a new HubSpot record has exactly one true association in steady
//! state). Records with no fetchable value are kept: fail-open toward
//! re-sync, never toward a silent skip.

use crosslink_types::models::{ExistingValueMap, SyncPair};

/// Keep only the pairs whose destination record has no existing value.
pub fn filter_unsynced(pairs: Vec<SyncPair>, existing: &ExistingValueMap) -> Vec<SyncPair> {
    pairs.into_iter().filter(|pair| !has_value(existing, &pair.hubspot_id)).collect()
}

fn has_value(existing: &ExistingValueMap, hubspot_id: &str) -> bool {
    matches!(existing.get(hubspot_id), Some(Some(value)) if !value.is_empty())
}
