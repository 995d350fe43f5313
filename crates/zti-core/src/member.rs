//! Network member records as reported by the controller.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A device registered on the network.
///
/// Deserializes from the controller's member record, flattening the nested
/// `config` object. `null` strings and lists become empty values, a `null`
/// `hidden` counts as hidden, and malformed tag pairs are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "MemberRecord")]
pub struct Member {
    /// Stable device identifier (the controller's `nodeId`).
    pub id: String,
    pub name: String,
    pub description: String,
    pub hidden: bool,
    pub authorized: bool,
    /// Managed addresses in controller order.
    pub ip_assignments: Vec<String>,
    /// Raw `(tag id, enum id)` pairs in controller order.
    pub tags: Vec<(u32, u32)>,
}

impl Member {
    /// The first managed address, which becomes `ansible_host`.
    #[must_use]
    pub fn first_ip(&self) -> Option<&str> {
        self.ip_assignments.first().map(String::as_str)
    }

    /// Decode a controller member list, skipping records that do not decode.
    #[must_use]
    pub fn from_records(records: Vec<Value>) -> Vec<Self> {
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match Self::deserialize(record) {
                Ok(member) => Some(member),
                Err(e) => {
                    tracing::warn!(index, %e, "skipping undecodable member record");
                    None
                }
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct MemberRecord {
    #[serde(rename = "nodeId")]
    node_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_hidden")]
    hidden: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    config: MemberConfigRecord,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberConfigRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    authorized: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    ip_assignments: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<Value>,
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            hidden: record.hidden,
            authorized: record.config.authorized,
            ip_assignments: record.config.ip_assignments,
            tags: record
                .config
                .tags
                .iter()
                .filter_map(|raw| {
                    let pair = tag_pair(raw);
                    if pair.is_none() {
                        tracing::debug!(member = %record.node_id, tag = %raw, "dropping malformed tag pair");
                    }
                    pair
                })
                .collect(),
            id: record.node_id,
        }
    }
}

/// `[tag id, enum id]` with both ids fitting in `u32`.
fn tag_pair(raw: &Value) -> Option<(u32, u32)> {
    let [tag_id, enum_id, ..] = raw.as_array()?.as_slice() else {
        return None;
    };
    let id = |value: &Value| value.as_u64().and_then(|v| u32::try_from(v).ok());
    Some((id(tag_id)?, id(enum_id)?))
}

/// Only an explicit `false` makes a member visible.
fn null_as_hidden<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
