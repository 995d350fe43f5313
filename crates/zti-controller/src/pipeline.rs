//! One inventory run against a controller.
//!
//! Strictly sequential: liveness (optional) → tag schema → members → build.
//! Any fetch failure aborts before the inventory is touched.

use zti_config::ZtiConfig;
use zti_core::{BuildOptions, BuildReport, Inventory, Member, TagSchema, build_with_options};

use crate::{ControllerClient, ControllerError};

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct InventoryRun {
    pub inventory: Inventory,
    pub schema: TagSchema,
    pub report: BuildReport,
}

/// Fetch the schema and members for `network_id`, in that order.
///
/// # Errors
///
/// Returns [`ControllerError::Unavailable`] if `require_liveness` is set and
/// the controller is down, or any fetch error.
pub async fn fetch(
    client: &ControllerClient,
    network_id: &str,
    require_liveness: bool,
) -> Result<(TagSchema, Vec<Member>), ControllerError> {
    if require_liveness && !client.check_liveness().await {
        return Err(ControllerError::Unavailable {
            url: client.base_url().to_string(),
        });
    }

    let schema = client.fetch_tag_schema(network_id).await?;
    let members = client.fetch_members(network_id).await?;
    Ok((schema, members))
}

/// Build the inventory for the configured network.
///
/// # Errors
///
/// Returns [`ControllerError::Config`] for an incomplete controller section,
/// or any error from [`fetch`].
pub async fn run(config: &ZtiConfig) -> Result<InventoryRun, ControllerError> {
    let client = ControllerClient::from_config(&config.controller)?;
    let network_id = config.controller.network_id.as_str();
    tracing::info!(network = %network_id, controller = %client.base_url(), "building inventory");

    let (schema, members) = fetch(&client, network_id, config.controller.require_liveness).await?;

    let options = BuildOptions {
        ungrouped_group: config.inventory.catch_all_group().map(str::to_string),
    };
    let mut inventory = Inventory::new();
    let report = build_with_options(&schema, &members, &mut inventory, &options);

    Ok(InventoryRun {
        inventory,
        schema,
        report,
    })
}
