//! Core domain models for Crosslink.
//!
//! This module contains all shared data structures used across the sync
//! pipeline: runtime configuration, Mautic/HubSpot wire payloads, and the
//! reconciliation unit of work.

mod config;
mod hubspot;
mod mautic;
mod sync;

// Re-export all models
pub use config::{
    SyncConfig, DEFAULT_BATCH_SIZE, DEFAULT_HUBSPOT_BASE_URL, DEFAULT_PAGE_SIZE,
    ENV_HUBSPOT_TOKEN, ENV_MAUTIC_BASE_URL, ENV_MAUTIC_PASSWORD, ENV_MAUTIC_USERNAME,
    ENV_SLACK_WEBHOOK_URL,
};
pub use hubspot::{
    BatchInput, BatchReadRequest, BatchReadResponse, BatchRecord, BatchUpdateInput,
    BatchUpdateRequest, BatchUpdateResponse, PropertyDefinition, MAUTIC_ID_PROPERTY,
};
pub use mautic::{ContactFields, ContactsPage, MauticContact};
pub use sync::{ExistingValueMap, RunReport, SyncPair};
