use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::utils::utc_timestamp;
use uuid::Uuid;

/// `name` and `description` hold whatever JSON value the client sent; only
/// their presence is ever checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: Value,
    pub description: Value,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Item {
    /// New item with a random v4 id, stamped with the current time.
    pub fn new(name: impl Into<Value>, description: impl Into<Value>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, description)
    }

    pub fn with_id(id: String, name: impl Into<Value>, description: impl Into<Value>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            created_at: utc_timestamp(),
            updated_at: None,
        }
    }

    /// Overwrites only the supplied fields; `updated_at` is always refreshed.
    pub fn apply(&mut self, changes: ItemChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.updated_at = Some(utc_timestamp());
    }
}

/// Partial update. `None` leaves the field as it is; `Some(Value::Null)`
/// stores null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<Value>,
    pub description: Option<Value>,
}
