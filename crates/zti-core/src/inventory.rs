//! Inventory sink abstraction and the in-memory Ansible inventory.

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Target of inventory building.
///
/// Every operation must be idempotent: repeating a call with the same
/// arguments leaves the sink unchanged.
pub trait InventorySink {
    /// Ensure a group exists.
    fn add_group(&mut self, name: &str);

    /// Link `child` (a group or a host) under `parent`.
    fn add_child(&mut self, parent: &str, child: &str);

    /// Ensure a host exists.
    fn add_host(&mut self, host: &str);

    /// Set a host variable, replacing any previous value.
    fn set_variable(&mut self, host: &str, key: &str, value: &str);
}

/// Members of a single inventory group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub children: BTreeSet<String>,
    pub hosts: BTreeSet<String>,
}

/// In-memory inventory with deterministic ordering.
///
/// Serializes to Ansible's dynamic inventory JSON (`--list` output):
/// one object per group plus `_meta.hostvars`, and an `all` group whose
/// children are the groups no other group claims.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    groups: BTreeMap<String, Group>,
    hosts: BTreeMap<String, BTreeMap<String, String>>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    #[must_use]
    pub fn has_host(&self, host: &str) -> bool {
        self.hosts.contains_key(host)
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.keys().map(String::as_str)
    }

    /// Variables of `host`, if the host exists.
    #[must_use]
    pub fn host_vars(&self, host: &str) -> Option<&BTreeMap<String, String>> {
        self.hosts.get(host)
    }

    /// Groups that list `host` directly.
    #[must_use]
    pub fn groups_of_host(&self, host: &str) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|(_, group)| group.hosts.contains(host))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Groups that are not a child of any other group.
    #[must_use]
    pub fn top_level_groups(&self) -> Vec<&str> {
        let claimed: BTreeSet<&str> = self
            .groups
            .values()
            .flat_map(|group| group.children.iter().map(String::as_str))
            .collect();
        self.groups
            .keys()
            .map(String::as_str)
            .filter(|name| !claimed.contains(name))
            .collect()
    }

    /// Render as Ansible dynamic inventory JSON.
    #[must_use]
    pub fn to_ansible_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

impl InventorySink for Inventory {
    fn add_group(&mut self, name: &str) {
        if !self.groups.contains_key(name) {
            self.groups.insert(name.to_string(), Group::default());
        }
    }

    /// Groups take precedence over hosts when `child` names both. An unknown
    /// child is created as a group. A group is never linked under itself.
    fn add_child(&mut self, parent: &str, child: &str) {
        if parent == child {
            tracing::warn!(group = %parent, "refusing to add group as its own child");
            return;
        }
        self.add_group(parent);

        let is_host = !self.groups.contains_key(child) && self.hosts.contains_key(child);
        if !is_host {
            self.add_group(child);
        }
        if let Some(group) = self.groups.get_mut(parent) {
            if is_host {
                group.hosts.insert(child.to_string());
            } else {
                group.children.insert(child.to_string());
            }
        }
    }

    fn add_host(&mut self, host: &str) {
        if !self.hosts.contains_key(host) {
            self.hosts.insert(host.to_string(), BTreeMap::new());
        }
    }

    fn set_variable(&mut self, host: &str, key: &str, value: &str) {
        self.hosts
            .entry(host.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}

struct GroupBody<'a>(&'a Group);

impl Serialize for GroupBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.0.hosts.is_empty() {
            map.serialize_entry("hosts", &self.0.hosts)?;
        }
        if !self.0.children.is_empty() {
            map.serialize_entry("children", &self.0.children)?;
        }
        map.end()
    }
}

struct HostVars<'a>(&'a BTreeMap<String, BTreeMap<String, String>>);

impl Serialize for HostVars<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("hostvars", self.0)?;
        map.end()
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("_meta", &HostVars(&self.hosts))?;

        if !self.groups.contains_key("all") {
            let mut all = Map::new();
            all.insert("children".to_string(), Value::from(self.top_level_groups()));
            map.serialize_entry("all", &all)?;
        }

        for (name, group) in &self.groups {
            map.serialize_entry(name, &GroupBody(group))?;
        }
        map.end()
    }
}
