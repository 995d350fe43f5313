use std::path::PathBuf;

use figment::Jail;
use zti_config::{ConfigSources, ZtiConfig};

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ZTI_CONTROLLER__API_URL", "https://env.example");
        jail.set_env("ZTI_CONTROLLER__API_KEY", "env-key");
        jail.set_env("ZTI_CONTROLLER__NETWORK_ID", "8056c2e21c000001");
        jail.set_env("ZTI_CONTROLLER__TIMEOUT_SECS", "3");
        jail.set_env("ZTI_INVENTORY__UNGROUPED_GROUP", "untagged");

        let config = ZtiConfig::load().expect("config loads");
        assert_eq!(config.controller.api_url, "https://env.example");
        assert_eq!(config.controller.api_key, "env-key");
        assert_eq!(config.controller.network_id, "8056c2e21c000001");
        assert_eq!(config.controller.timeout_secs, 3);
        assert_eq!(config.inventory.catch_all_group(), Some("untagged"));
        Ok(())
    });
}

#[test]
fn env_beats_inventory_source() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "zerotier_inventory.yml",
            "zt_api_key: yaml-key\nzt_network_id: from-yaml\n",
        )?;
        jail.set_env("ZTI_CONTROLLER__API_KEY", "env-key");

        let sources = ConfigSources {
            inventory_source: Some(PathBuf::from("zerotier_inventory.yml")),
            ..ConfigSources::default()
        };
        let config = ZtiConfig::load_from(&sources).expect("config loads");
        assert_eq!(config.controller.api_key, "env-key");
        assert_eq!(config.controller.network_id, "from-yaml");
        Ok(())
    });
}

#[test]
fn unrelated_prefixed_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("ZTI_LOG", "debug");
        let config = ZtiConfig::load().expect("config loads");
        assert!(!config.controller.is_configured());
        Ok(())
    });
}

#[test]
fn all_digit_env_values_stay_text() {
    Jail::expect_with(|jail| {
        jail.set_env("ZTI_CONTROLLER__API_KEY", "123456789");
        jail.set_env("ZTI_CONTROLLER__NETWORK_ID", "1234567890123456");

        let config = ZtiConfig::load().expect("config loads");
        assert_eq!(config.controller.api_key, "123456789");
        assert_eq!(config.controller.network_id, "1234567890123456");
        Ok(())
    });
}
