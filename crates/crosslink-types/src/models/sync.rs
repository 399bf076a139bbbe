//! Reconciliation units and run accounting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// HubSpot contact ID -> current `mautic_contact_id` value (None when unset
/// or unreadable). Built by the destination prober, consumed by the delta
/// filter; advisory only.
pub type ExistingValueMap = HashMap<String, Option<String>>;

/// One unit of work: copy `mautic_id` into the HubSpot contact `hubspot_id`.
///
/// Immutable once constructed; `hubspot_id` is guaranteed non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncPair {
    /// Mautic contact ID (the value to write)
    pub mautic_id: i64,
    /// HubSpot contact ID (the record to write into)
    pub hubspot_id: String,
}

impl SyncPair {
    /// Build a pair, trimming the HubSpot ID. Returns None for blank IDs so
    /// records without a usable cross-reference never enter the pipeline.
    pub fn new(mautic_id: i64, hubspot_id: &str) -> Option<Self> {
        let trimmed = hubspot_id.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self { mautic_id, hubspot_id: trimmed.to_string() })
    }
}

/// Terminal output of one sync run. Never persisted; every run recomputes
/// state fresh from both systems.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunReport {
    /// Records written successfully
    pub success: usize,
    /// Records that failed to write
    pub failed: usize,
    /// Candidates dropped because the destination already held a value
    pub skipped_existing: usize,
}

impl RunReport {
    /// Total records the writer attempted.
    pub fn attempted(&self) -> usize {
        self.success + self.failed
    }

    /// A run fails when any write failed, regardless of successes.
    pub fn is_failure(&self) -> bool {
        self.failed > 0
    }
}
