use serde::Serialize;
use zti_config::ZtiConfig;
use zti_controller::ControllerClient;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusResponse {
    api_url: String,
    network_id: String,
    up: bool,
}

/// Handle `zti status`.
pub async fn handle(config: &ZtiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ControllerClient::from_config(&config.controller)?;
    let up = client.check_liveness().await;

    output(
        &StatusResponse {
            api_url: client.base_url().to_string(),
            network_id: config.controller.network_id.clone(),
            up,
        },
        flags.format,
    )?;

    if !up {
        anyhow::bail!("controller at {} is not responding", client.base_url());
    }
    Ok(())
}
