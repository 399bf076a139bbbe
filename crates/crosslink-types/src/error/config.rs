//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building the runtime configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// A required environment variable is missing or empty
    #[error("{name} not set")]
    MissingVar {
        /// Name of the missing environment variable
        name: String,
    },

    /// A URL-valued variable failed to parse
    #[error("Invalid URL in {name}: {value}")]
    InvalidUrl {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
    },
}

impl ConfigError {
    /// Create a missing-variable error for the given env var name.
    pub fn missing(name: &str) -> Self {
        Self::MissingVar { name: name.to_string() }
    }
}
