//! HubSpot (destination system) errors.
//!
//! Only pre-flight property failures live here. Probe and write batch
//! failures degrade or are counted per-item; they never abort the run and
//! are not represented as errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during the HubSpot pre-flight property check.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum HubSpotError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("HubSpot request failed: {message}")]
    Request {
        /// Description of the transport failure
        message: String,
    },

    /// Property lookup returned a status other than 200 or 404
    #[error("Unexpected status checking property: {status}")]
    PropertyLookup {
        /// HTTP status code returned by the lookup
        status: u16,
    },

    /// Property creation did not return 201
    #[error("Failed to create property: {status} {body}")]
    PropertyCreate {
        /// HTTP status code returned by the create call
        status: u16,
        /// Leading fragment of the response body
        body: String,
    },
}

impl HubSpotError {
    /// Create a transport error. Serializable errors cannot hold a
    /// `reqwest::Error` directly; callers convert at the HTTP boundary.
    pub fn request(e: impl std::fmt::Display) -> Self {
        Self::Request { message: e.to_string() }
    }
}
