use serde::Serialize;
use zti_config::ZtiConfig;
use zti_core::Inventory;
use zti_core::builder::{VAR_ANSIBLE_HOST, VAR_DESCRIPTION, VAR_NODE_NAME};

use crate::cli::GlobalFlags;
use crate::output::output;

/// One inventory host with its variables and direct groups.
#[derive(Debug, Serialize)]
struct HostRow<'a> {
    id: &'a str,
    node_name: Option<&'a str>,
    description: Option<&'a str>,
    ansible_host: Option<&'a str>,
    groups: Vec<&'a str>,
}

/// Handle `zti hosts`.
pub async fn handle(config: &ZtiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let run = zti_controller::run(config).await?;
    output(&host_rows(&run.inventory), flags.format)
}

fn host_rows(inventory: &Inventory) -> Vec<HostRow<'_>> {
    inventory
        .hosts()
        .map(|id| {
            let vars = inventory.host_vars(id);
            let var = |key: &str| vars.and_then(|vars| vars.get(key)).map(String::as_str);
            HostRow {
                id,
                node_name: var(VAR_NODE_NAME),
                description: var(VAR_DESCRIPTION),
                ansible_host: var(VAR_ANSIBLE_HOST),
                groups: inventory.groups_of_host(id),
            }
        })
        .collect()
}
