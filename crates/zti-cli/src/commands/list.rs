use serde::Serialize;
use zti_core::Inventory;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// One row of `zti list --format table`.
#[derive(Debug, Serialize)]
struct GroupRow<'a> {
    group: &'a str,
    children: Vec<&'a str>,
    hosts: Vec<&'a str>,
}

/// Handle `zti list` and `zti --list`.
pub async fn handle(config: &zti_config::ZtiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let run = zti_controller::run(config).await?;
    tracing::debug!(report = ?run.report, "inventory run finished");

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&run.inventory, flags.format),
        OutputFormat::Table => output(&group_rows(&run.inventory), flags.format),
    }
}

fn group_rows(inventory: &Inventory) -> Vec<GroupRow<'_>> {
    inventory
        .groups()
        .map(|(name, group)| GroupRow {
            group: name,
            children: group.children.iter().map(String::as_str).collect(),
            hosts: group.hosts.iter().map(String::as_str).collect(),
        })
        .collect()
}
