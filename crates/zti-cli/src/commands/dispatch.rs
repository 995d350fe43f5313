use zti_config::ZtiConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &ZtiConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::handle(config, flags).await,
        Commands::Host(args) => commands::host::handle(&args, config, flags).await,
        Commands::Status => commands::status::handle(config, flags).await,
        Commands::Schema => commands::schema::handle(config, flags).await,
        Commands::Hosts => commands::hosts::handle(config, flags).await,
    }
}
