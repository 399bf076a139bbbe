//! Mautic (source system) errors.
//!
//! Any error here is fatal for the current run: enumeration aborts and no
//! partial results are written.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while enumerating Mautic contacts.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum MauticError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("Mautic request failed: {message}")]
    Request {
        /// Description of the transport failure
        message: String,
    },

    /// Mautic returned a non-200 status for a contacts page
    #[error("Mautic API error: {status}")]
    ApiStatus {
        /// HTTP status code returned by Mautic
        status: u16,
    },

    /// Response body could not be decoded
    #[error("Invalid Mautic response: {message}")]
    InvalidResponse {
        /// Description of the decode failure
        message: String,
    },
}

impl MauticError {
    /// Create a transport error. Serializable errors cannot hold a
    /// `reqwest::Error` directly; callers convert at the HTTP boundary.
    pub fn request(e: impl std::fmt::Display) -> Self {
        Self::Request { message: e.to_string() }
    }

    /// Create a decode error.
    pub fn invalid_response(e: impl std::fmt::Display) -> Self {
        Self::InvalidResponse { message: e.to_string() }
    }
}
