use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the full dynamic inventory (same as `--list`).
    List,
    /// Print the variables of one host (same as `--host <ID>`).
    Host(HostArgs),
    /// Check whether the controller answers its status endpoint.
    Status,
    /// Print the network's normalized tag schema.
    Schema,
    /// List inventory hosts with their address and groups.
    Hosts,
}

/// Arguments for `zti host`.
#[derive(Clone, Debug, Args)]
pub struct HostArgs {
    /// Member node id.
    pub id: String,
}
