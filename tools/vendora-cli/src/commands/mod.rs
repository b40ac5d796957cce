//! CLI command implementations.

pub mod config;
pub mod countries;
pub mod demo;
pub mod wizard;

use clap::{Args, Subcommand};

/// Arguments for the wizard command.
#[derive(Args)]
pub struct WizardArgs {
    /// Prefill every step with a sample listing before starting.
    #[arg(long)]
    pub prefill: bool,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Simulate a product-service outage on the first submission.
    #[arg(long)]
    pub fail_submit: bool,

    /// Save as a draft instead of submitting for approval.
    #[arg(long)]
    pub as_draft: bool,
}

/// Arguments for the countries command.
#[derive(Args)]
pub struct CountriesArgs {
    /// Look up a single country code instead of listing all.
    #[arg(short, long)]
    pub code: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
