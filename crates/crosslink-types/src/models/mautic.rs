//! Mautic wire payloads.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One page of the Mautic contacts listing.
///
/// Contacts come keyed by contact ID as a numeric string; the deserializer
/// does not preserve the response ordering, so consumers re-sort by parsed ID.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactsPage {
    /// Contact ID (numeric string) -> contact
    #[serde(default)]
    pub contacts: HashMap<String, MauticContact>,
}

impl ContactsPage {
    /// Number of contacts on this page.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True when the page carried no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// A Mautic contact as returned by `/api/contacts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MauticContact {
    /// Nested field container
    #[serde(default)]
    pub fields: ContactFields,
}

/// Mautic nests custom fields under `fields.all`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFields {
    /// Field name -> value (string, number, or null)
    #[serde(default)]
    pub all: HashMap<String, Value>,
}

impl MauticContact {
    /// Extract the trimmed `hubspot_contact_id` cross-reference, if set.
    ///
    /// Mautic stores the field as a string or number depending on how it was
    /// written; blank and whitespace-only values count as unset.
    pub fn hubspot_contact_id(&self) -> Option<String> {
        match self.fields.all.get("hubspot_contact_id")? {
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn contact(value: Value) -> MauticContact {
        serde_json::from_value(serde_json::json!({
            "fields": { "all": { "hubspot_contact_id": value, "email": "a@b.co" } }
        }))
        .unwrap()
    }

    #[test]
    fn test_extracts_string_id() {
        assert_eq!(contact(Value::from("555")).hubspot_contact_id(), Some("555".to_string()));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(contact(Value::from(" 556 ")).hubspot_contact_id(), Some("556".to_string()));
        assert_eq!(contact(Value::from("   ")).hubspot_contact_id(), None);
        assert_eq!(contact(Value::from("")).hubspot_contact_id(), None);
    }

    #[test]
    fn test_numeric_id() {
        assert_eq!(contact(Value::from(557)).hubspot_contact_id(), Some("557".to_string()));
    }

    #[test]
    fn test_missing_and_null() {
        assert_eq!(contact(Value::Null).hubspot_contact_id(), None);
        let no_field: MauticContact =
            serde_json::from_value(serde_json::json!({ "fields": { "all": {} } })).unwrap();
        assert_eq!(no_field.hubspot_contact_id(), None);
    }

    #[test]
    fn test_page_deserializes_without_contacts_key() {
        let page: ContactsPage = serde_json::from_value(serde_json::json!({ "total": "0" })).unwrap();
        assert!(page.is_empty());
    }
}
