//! Schema descriptors: remote types and their fields.
//!
//! Wire names carry the `fibery/` prefix (`fibery/name`, `fibery/type`, ...);
//! the serde renames below keep the Rust structs idiomatic while
//! round-tripping the wire form unchanged.

use crate::error::{FiberyError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Describes one field of a remote type.
///
/// `meta` carries flags the remote service interprets (secured, readonly,
/// id marker, default value); this client passes it through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "fibery/name")]
    pub name: String,
    #[serde(rename = "fibery/type")]
    pub field_type: String,
    #[serde(rename = "fibery/meta", default)]
    pub meta: Map<String, Value>,
}

impl FieldDescriptor {
    /// Create a descriptor with empty meta, validating name and type.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Result<Self> {
        Self::with_meta(name, field_type, Map::new())
    }

    /// Create a descriptor with the given meta, validating name and type.
    pub fn with_meta(
        name: impl Into<String>,
        field_type: impl Into<String>,
        meta: Map<String, Value>,
    ) -> Result<Self> {
        let descriptor = Self {
            name: name.into(),
            field_type: field_type.into(),
            meta,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check that name and type are non-empty.
    ///
    /// Descriptors can also be built by struct literal or deserialized from
    /// caller-supplied JSON, so operations re-run this check before any
    /// request is sent.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FiberyError::Validation {
                message: "field name must not be empty".into(),
            });
        }
        if self.field_type.trim().is_empty() {
            return Err(FiberyError::Validation {
                message: format!("field '{}' has an empty type", self.name),
            });
        }
        Ok(())
    }
}

/// Describes one remote type (database).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(rename = "fibery/name")]
    pub name: String,
    #[serde(rename = "fibery/fields", default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(rename = "fibery/meta", default)]
    pub meta: Map<String, Value>,
    #[serde(rename = "fibery/id")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_descriptor_round_trips_wire_aliases() {
        let descriptor = FieldDescriptor {
            name: "Crm/Stage".into(),
            field_type: "fibery/text".into(),
            meta: json!({"fibery/secured?": false})
                .as_object()
                .cloned()
                .unwrap(),
        };

        let wire = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            wire,
            json!({
                "fibery/name": "Crm/Stage",
                "fibery/type": "fibery/text",
                "fibery/meta": {"fibery/secured?": false}
            })
        );

        let parsed: FieldDescriptor = serde_json::from_value(wire).unwrap();
        assert_eq!(parsed, descriptor);
    }

    #[test]
    fn field_descriptor_meta_defaults_to_empty() {
        let parsed: FieldDescriptor = serde_json::from_value(json!({
            "fibery/name": "Crm/Name",
            "fibery/type": "fibery/text"
        }))
        .unwrap();
        assert!(parsed.meta.is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            FieldDescriptor::new("", "fibery/text"),
            Err(FiberyError::Validation { .. })
        ));
    }

    #[test]
    fn empty_type_is_rejected() {
        assert!(matches!(
            FieldDescriptor::new("Crm/Name", "  "),
            Err(FiberyError::Validation { .. })
        ));
    }

    #[test]
    fn type_descriptor_parses_schema_entry() {
        let parsed: TypeDescriptor = serde_json::from_value(json!({
            "fibery/name": "Product Management/Task",
            "fibery/fields": [
                {"fibery/name": "fibery/id", "fibery/type": "fibery/uuid"}
            ],
            "fibery/meta": {"fibery/domain?": true},
            "fibery/id": "7d1e88f1-2f0a-4a36-9c7e-1f53a21f9f7b"
        }))
        .unwrap();

        assert_eq!(parsed.name, "Product Management/Task");
        assert_eq!(parsed.fields.len(), 1);
        assert_eq!(parsed.fields[0].field_type, "fibery/uuid");
        assert_eq!(parsed.meta.get("fibery/domain?"), Some(&json!(true)));
    }
}
