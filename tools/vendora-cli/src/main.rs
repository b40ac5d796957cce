//! Vendora CLI - Seller console for the Vendora marketplace.
//!
//! Commands:
//! - `vendora wizard` - Interactive six-step listing wizard
//! - `vendora demo` - Scripted listing from start to submission
//! - `vendora countries` - Reference country and GST table
//! - `vendora config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, CountriesArgs, DemoArgs, WizardArgs};

/// Vendora CLI - Create and submit marketplace product listings
#[derive(Parser)]
#[command(name = "vendora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the listing wizard interactively
    Wizard(WizardArgs),

    /// Run a scripted listing end to end
    Demo(DemoArgs),

    /// Show the reference country table
    Countries(CountriesArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Wizard(args) => commands::wizard::run(args, &ctx),
        Commands::Demo(args) => commands::demo::run(args, &ctx),
        Commands::Countries(args) => commands::countries::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
