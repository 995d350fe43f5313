//! Tag schema normalization.
//!
//! The controller defines tags by display name, each with an internal `id`
//! and an `enums` map of `enum name -> internal id`. Member records refer to
//! tags and enum values by internal id only, so the schema is re-keyed by tag
//! id and each enum map is inverted once, before any member is processed.
//!
//! ```text
//! {"role": {"id": 1, "enums": {"web": 10, "db": 11}}}
//!   -> 1 => TagSchemaEntry { name: "role", enums: {10: "web", 11: "db"} }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Field of the network descriptor that carries the tag schema.
pub const TAGS_BY_NAME_FIELD: &str = "tagsByName";

/// One tag defined on the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSchemaEntry {
    pub tag_id: u32,
    /// Display name; becomes the primary group.
    pub name: String,
    /// Internal enum id to enum display name; the values become child groups.
    pub enums_by_internal_id: BTreeMap<u32, String>,
}

impl TagSchemaEntry {
    /// Display name of the enum value with the given internal id.
    #[must_use]
    pub fn enum_name(&self, enum_id: u32) -> Option<&str> {
        self.enums_by_internal_id.get(&enum_id).map(String::as_str)
    }
}

/// Immutable per-run lookup from tag id to [`TagSchemaEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSchema {
    entries: BTreeMap<u32, TagSchemaEntry>,
}

#[derive(Deserialize)]
struct RawTagDefinition {
    id: u32,
    enums: Map<String, Value>,
}

impl TagSchema {
    /// Build the lookup from the controller's `tagsByName` payload.
    ///
    /// Produces exactly one entry per tag in the payload. If two enum names
    /// inside a tag share an internal id, or two tags share an id, the name
    /// that comes later in the payload wins and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SchemaFormat`] if the payload is not a map of
    /// `{ "id": u32, "enums": { name: u32 } }` records.
    pub fn normalize(raw: &Value) -> Result<Self, CoreError> {
        let definitions = raw
            .as_object()
            .ok_or_else(|| CoreError::schema_format(format!("expected a map of tags, got {raw}")))?;

        let mut entries = BTreeMap::new();
        for (tag_name, definition) in definitions {
            let definition = RawTagDefinition::deserialize(definition)
                .map_err(|e| CoreError::schema_format(format!("tag '{tag_name}': {e}")))?;

            let mut enums_by_internal_id = BTreeMap::new();
            for (enum_name, enum_id) in definition.enums {
                let enum_id = u32::deserialize(&enum_id).map_err(|e| {
                    CoreError::schema_format(format!("tag '{tag_name}' enum '{enum_name}': {e}"))
                })?;
                if let Some(previous) = enums_by_internal_id.insert(enum_id, enum_name) {
                    tracing::warn!(
                        tag = %tag_name,
                        enum_id,
                        overwritten = %previous,
                        "duplicate enum id in tag schema; keeping the later name"
                    );
                }
            }

            let entry = TagSchemaEntry {
                tag_id: definition.id,
                name: tag_name.clone(),
                enums_by_internal_id,
            };
            if let Some(previous) = entries.insert(definition.id, entry) {
                tracing::warn!(
                    tag_id = definition.id,
                    overwritten = %previous.name,
                    "duplicate tag id in tag schema; keeping the later tag"
                );
            }
        }

        tracing::debug!(tags = entries.len(), "normalized tag schema");
        Ok(Self { entries })
    }

    /// Extract `tagsByName` from a network descriptor and normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SchemaFormat`] if the descriptor has no
    /// `tagsByName` field or the field is malformed.
    pub fn from_network(descriptor: &Value) -> Result<Self, CoreError> {
        let raw = descriptor.get(TAGS_BY_NAME_FIELD).ok_or_else(|| {
            CoreError::schema_format(format!(
                "network descriptor has no '{TAGS_BY_NAME_FIELD}' field"
            ))
        })?;
        Self::normalize(raw)
    }

    #[must_use]
    pub fn get(&self, tag_id: u32) -> Option<&TagSchemaEntry> {
        self.entries.get(&tag_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending tag id order.
    pub fn iter(&self) -> impl Iterator<Item = &TagSchemaEntry> {
        self.entries.values()
    }
}

/// Convenience wrapper for [`TagSchema::normalize`].
///
/// # Errors
///
/// See [`TagSchema::normalize`].
pub fn normalize(raw: &Value) -> Result<TagSchema, CoreError> {
    TagSchema::normalize(raw)
}
