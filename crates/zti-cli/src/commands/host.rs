use std::collections::BTreeMap;

use zti_config::ZtiConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HostArgs;
use crate::output::output;

/// Handle `zti host <ID>` and `zti --host <ID>`.
///
/// Unknown hosts print an empty object, which Ansible treats as "no vars".
pub async fn handle(args: &HostArgs, config: &ZtiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let run = zti_controller::run(config).await?;

    let vars = run.inventory.host_vars(&args.id).cloned().unwrap_or_else(|| {
        tracing::debug!(host = %args.id, "host not in inventory");
        BTreeMap::new()
    });
    output(&vars, flags.format)
}
