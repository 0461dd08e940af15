//! The module contains the `Item` struct, one comparable option inside a
//! category.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single option being compared (one flight, one hotel, ...).
///
/// Besides the id, an item is an open JSON object: standard categories fill
/// in their schema fields (`price`, `pricePerNight`, `checkIn`, ...), custom
/// categories store whatever name/value pairs the user entered. The engine
/// never validates field contents beyond presence; malformed values simply
/// resolve to a zero price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, unique within the owning category list.
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    /// Creates an item with a fresh UUID id.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fields,
        }
    }

    /// Creates an item with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns a field value, if present.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Shallow-merges `updates` into the item's fields.
    ///
    /// An explicit JSON `null` removes the field, everything else replaces
    /// it. Untouched fields are preserved.
    pub fn merge_fields(&mut self, updates: Map<String, Value>) {
        for (name, value) in updates {
            if value.is_null() {
                self.fields.remove(&name);
            } else {
                self.fields.insert(name, value);
            }
        }
    }
}
