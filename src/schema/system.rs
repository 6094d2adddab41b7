//! Implicit system fields for domain types.
//!
//! Every database carries a fixed set of service-managed fields: the title
//! text field, the UUID id, the public id, and the creation/modification
//! timestamps. The service expects them in the `schema.type/create` field
//! list, so they are merged into the caller's fields before sending.

use crate::schema::FieldDescriptor;
use serde_json::{json, Map, Value};

fn meta(entries: Value) -> Map<String, Value> {
    entries.as_object().cloned().unwrap_or_default()
}

/// The system fields injected into every created database.
pub fn system_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor {
            name: "fibery/name".into(),
            field_type: "fibery/text".into(),
            meta: meta(json!({
                "fibery/secured?": false,
                "ui/title?": true
            })),
        },
        FieldDescriptor {
            name: "fibery/id".into(),
            field_type: "fibery/uuid".into(),
            meta: meta(json!({
                "fibery/secured?": false,
                "fibery/id?": true,
                "fibery/readonly?": true
            })),
        },
        FieldDescriptor {
            name: "fibery/public-id".into(),
            field_type: "fibery/text".into(),
            meta: meta(json!({
                "fibery/secured?": false,
                "fibery/public-id?": true,
                "fibery/readonly?": true
            })),
        },
        FieldDescriptor {
            name: "fibery/creation-date".into(),
            field_type: "fibery/date-time".into(),
            meta: meta(json!({
                "fibery/secured?": false,
                "fibery/creation-date?": true,
                "fibery/readonly?": true,
                "fibery/default-value": "$now"
            })),
        },
        FieldDescriptor {
            name: "fibery/modification-date".into(),
            field_type: "fibery/date-time".into(),
            meta: meta(json!({
                "fibery/modification-date?": true,
                "fibery/required?": true,
                "fibery/readonly?": true,
                "fibery/default-value": "$now",
                "fibery/secured?": false
            })),
        },
    ]
}

/// Append each system field unless the caller already supplied a field of
/// the same name. Caller-supplied fields always win and are never
/// duplicated or overwritten.
pub fn merge_system_fields(fields: Vec<FieldDescriptor>) -> Vec<FieldDescriptor> {
    let mut merged = fields;
    for system in system_fields() {
        if !merged.iter().any(|field| field.name == system.name) {
            merged.push(system);
        }
    }
    merged
}
