//! HubSpot wire payloads.
//!
//! Request/response shapes for the CRM v3 property and batch endpoints.
//! Batch endpoints return 207 for partial multi-status outcomes; both 200
//! and 207 bodies carry `results` (and `errors` for updates).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the custom contact property Crosslink maintains.
pub const MAUTIC_ID_PROPERTY: &str = "mautic_contact_id";

/// Property schema for the create call (`POST /crm/v3/properties/contacts`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyDefinition {
    /// Internal property name
    pub name: String,
    /// Display label
    pub label: String,
    /// Property data type
    #[serde(rename = "type")]
    pub data_type: String,
    /// Form field type
    #[serde(rename = "fieldType")]
    pub field_type: String,
    /// Property group
    #[serde(rename = "groupName")]
    pub group_name: String,
    /// Human-readable description
    pub description: String,
}

impl PropertyDefinition {
    /// The fixed schema of the `mautic_contact_id` property.
    pub fn mautic_contact_id() -> Self {
        Self {
            name: MAUTIC_ID_PROPERTY.to_string(),
            label: "Mautic Contact ID".to_string(),
            data_type: "number".to_string(),
            field_type: "number".to_string(),
            group_name: "contactinformation".to_string(),
            description: "Mautic CRM contact ID for webhook integration".to_string(),
        }
    }
}

/// Body of `POST /crm/v3/objects/contacts/batch/read`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReadRequest {
    /// Property names to fetch
    pub properties: Vec<String>,
    /// Record IDs to read
    pub inputs: Vec<BatchInput>,
}

impl BatchReadRequest {
    /// Read `mautic_contact_id` for the given contact IDs.
    pub fn mautic_ids(ids: &[String]) -> Self {
        Self {
            properties: vec![MAUTIC_ID_PROPERTY.to_string()],
            inputs: ids.iter().map(|id| BatchInput { id: id.clone() }).collect(),
        }
    }
}

/// A single record reference in a batch request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchInput {
    /// HubSpot record ID
    pub id: String,
}

/// Body of a batch read response (200 or 207).
#[derive(Debug, Clone, Deserialize)]
pub struct BatchReadResponse {
    /// Records that could be read
    #[serde(default)]
    pub results: Vec<BatchRecord>,
}

/// One record in a batch read response.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    /// HubSpot record ID
    pub id: String,
    /// Requested property values; unset properties come back null
    #[serde(default)]
    pub properties: HashMap<String, Option<String>>,
}

impl BatchRecord {
    /// Current `mautic_contact_id` value, if any.
    pub fn mautic_contact_id(&self) -> Option<String> {
        self.properties.get(MAUTIC_ID_PROPERTY).cloned().flatten()
    }
}

/// Body of `POST /crm/v3/objects/contacts/batch/update`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateRequest {
    /// Per-record updates
    pub inputs: Vec<BatchUpdateInput>,
}

/// One record update in a batch update request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateInput {
    /// HubSpot record ID
    pub id: String,
    /// Property name -> new value
    pub properties: HashMap<String, String>,
}

impl BatchUpdateInput {
    /// Set `mautic_contact_id` on the given contact.
    pub fn mautic_id(hubspot_id: &str, mautic_id: i64) -> Self {
        Self {
            id: hubspot_id.to_string(),
            properties: HashMap::from([(MAUTIC_ID_PROPERTY.to_string(), mautic_id.to_string())]),
        }
    }
}

/// Body of a batch update response (200 or 207).
///
/// Per-item failures do not fail the whole batch: `results` holds the
/// records that were written, `errors` the ones that were not.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchUpdateResponse {
    /// Successfully updated records
    #[serde(default)]
    pub results: Vec<Value>,
    /// Per-record failures
    #[serde(default)]
    pub errors: Vec<Value>,
}
