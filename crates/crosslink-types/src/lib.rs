//! # Crosslink Types
//!
//! Core types, models, and error definitions for Crosslink.
//!
//! This crate provides the foundational type system for the Crosslink
//! reconciliation job:
//!
//! - **`error`** - Typed error hierarchy for configuration, Mautic, and HubSpot
//! - **`models`** - Domain models (SyncPair, RunReport, SyncConfig, wire payloads)
//!
//! ## Architecture Role
//!
//! `crosslink-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     crosslink-types (this crate)
//!             │
//!             ▼
//!      crosslink-core
//!             │
//!             ▼
//!      crosslink-cron
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for wire payloads and logging
//! - **Clone** for cheap sharing across component boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, HubSpotError, MauticError, Result, SyncError};

// Re-export core model types
pub use models::{
    ContactsPage, ExistingValueMap, MauticContact, PropertyDefinition, RunReport, SyncConfig,
    SyncPair,
};
