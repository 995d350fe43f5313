//! Inventory shaping options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InventoryConfig {
    /// Group for eligible members whose tags resolve to nothing.
    /// Empty disables the catch-all and such members are left out.
    #[serde(default)]
    pub ungrouped_group: String,
}

impl InventoryConfig {
    pub fn catch_all_group(&self) -> Option<&str> {
        let name = self.ungrouped_group.trim();
        (!name.is_empty()).then_some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catch_all_disabled_by_default() {
        assert_eq!(InventoryConfig::default().catch_all_group(), None);
    }

    #[test]
    fn catch_all_enabled_when_named() {
        let config = InventoryConfig {
            ungrouped_group: " untagged ".into(),
        };
        assert_eq!(config.catch_all_group(), Some("untagged"));
    }
}
