//! CLI command implementations.

pub mod config;
pub mod render;
pub mod shop;
pub mod snapshot;

use clap::{Args, Subcommand};

/// Premium/standard override shared by page commands.
#[derive(Args, Debug, Default)]
pub struct MembershipArgs {
    /// Treat the customer as premium (free shipping).
    #[arg(long, conflicts_with = "standard")]
    pub premium: bool,

    /// Treat the customer as standard (flat-rate shipping).
    #[arg(long)]
    pub standard: bool,
}

impl MembershipArgs {
    /// `None` keeps the configured value.
    pub fn premium_override(&self) -> Option<bool> {
        match (self.premium, self.standard) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Variant index to select before rendering.
    #[arg(long, default_value_t = 0)]
    pub variant: usize,

    #[command(flatten)]
    pub membership: MembershipArgs,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the snapshot command.
#[derive(Args)]
pub struct SnapshotArgs {
    /// Variant index to select before taking the snapshot.
    #[arg(long, default_value_t = 0)]
    pub variant: usize,

    #[command(flatten)]
    pub membership: MembershipArgs,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    #[command(flatten)]
    pub membership: MembershipArgs,

    /// Write the final page HTML here when the session ends.
    #[arg(long)]
    pub save_html: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a pdp.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}
