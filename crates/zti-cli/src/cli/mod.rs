use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, HostArgs};

/// Top-level CLI parser for the `zti` binary.
///
/// Speaks Ansible's inventory-script protocol: `zti --list` and
/// `zti --host <ID>`. Running with no arguments behaves like `--list`.
#[derive(Debug, Parser)]
#[command(
    name = "zti",
    version,
    about = "ZeroTier tag-grouped Ansible dynamic inventory"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the full inventory
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print variables for one host
    #[arg(long, value_name = "ID")]
    pub host: Option<String>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Explicit TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ansible-style source file (*zerotier_inventory.yml)
    #[arg(short, long, global = true)]
    pub inventory_file: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            inventory_file: self.inventory_file.clone(),
        }
    }

    /// Fold the protocol flags and the optional subcommand into one command.
    pub fn resolve_command(&self) -> anyhow::Result<Commands> {
        match (&self.command, self.list, &self.host) {
            (Some(_), true, _) | (Some(_), _, Some(_)) => {
                anyhow::bail!("--list/--host cannot be combined with a subcommand")
            }
            (Some(command), false, None) => Ok(command.clone()),
            (None, _, Some(id)) => Ok(Commands::Host(HostArgs { id: id.clone() })),
            (None, _, None) => Ok(Commands::List),
        }
    }
}
