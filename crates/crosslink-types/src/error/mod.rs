//! Typed error definitions for Crosslink.
//!
//! This module provides a structured error hierarchy with specific error types
//! for different domains. All errors are designed to be:
//!
//! - **Serializable** for notification payloads via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for exit-code mapping via enum variants
//! - **Composable** via thiserror derive macros

mod config;
mod hubspot;
mod mautic;

pub use config::ConfigError;
pub use hubspot::HubSpotError;
pub use mautic::MauticError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
///
/// This is the error type of the sync pipeline; the binary matches on its
/// variants to decide the notification and exit code.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum SyncError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a Mautic (source) error
    #[error("Mautic error: {0}")]
    Mautic(#[from] MauticError),

    /// Wraps a HubSpot (destination) error
    #[error("HubSpot error: {0}")]
    HubSpot(#[from] HubSpotError),
}

/// Standard Result type using SyncError.
pub type Result<T> = std::result::Result<T, SyncError>;
