use std::path::Path;

use anyhow::Context;
use zti_config::{ConfigSources, ZtiConfig};

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ZtiConfig> {
    load_dotenv(flags)?;

    let sources = ConfigSources {
        config_file: flags.config.clone(),
        inventory_source: flags.inventory_file.clone(),
    };
    ZtiConfig::load_from(&sources).map_err(anyhow::Error::from)
}

/// Prefer a `.env` beside an explicit config or inventory file, then fall
/// back to the current directory.
fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    let explicit_dirs = [flags.config.as_deref(), flags.inventory_file.as_deref()]
        .into_iter()
        .flatten()
        .filter_map(Path::parent);

    for dir in explicit_dirs {
        let env_path = dir.join(".env");
        if env_path.is_file() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
