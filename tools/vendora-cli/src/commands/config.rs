//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    // Platform section
    ctx.output.info("");
    ctx.output.info("[platform]");
    ctx.output.kv(
        "platform_fee_percent",
        &ctx.config.platform.platform_fee_percent.to_string(),
    );
    ctx.output.kv(
        "commission_percent",
        &ctx.config.platform.commission_percent.to_string(),
    );
    ctx.output.kv(
        "default_gst_percent",
        &ctx.config.platform.default_gst_percent.to_string(),
    );

    // Seller section
    ctx.output.info("");
    ctx.output.info("[seller]");
    ctx.output.kv("display_name", &ctx.config.seller.display_name);
    ctx.output.kv("country", &ctx.config.seller.country);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        println!(r#"{{"key": "{}", "value": {}}}"#, key, value);
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    // Find config file
    let config_path = find_config_file(&ctx.cwd)?;

    // Load current config
    let mut config = CliConfig::load(&config_path)?;

    // Set the value
    set_config_value(&mut config, key, value)?;

    // Save config
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("vendora.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.config.seller.display_name);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // Check percentage ranges
    let percents = [
        ("platform.platform_fee_percent", ctx.config.platform.platform_fee_percent),
        ("platform.commission_percent", ctx.config.platform.commission_percent),
        ("platform.default_gst_percent", ctx.config.platform.default_gst_percent),
    ];
    for (key, value) in percents {
        if !(0.0..=100.0).contains(&value) {
            errors.push(format!("{} must be 0-100", key));
        }
    }

    // Check seller settings
    if ctx.config.seller.display_name.trim().is_empty() {
        errors.push("seller.display_name is required".to_string());
    }

    let country = ctx.config.seller.country.trim();
    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
        errors.push("seller.country must be a two-letter ISO code".to_string());
    } else if vendora_listing::countries::gst_rate_for(&country.to_uppercase()).is_none() {
        warnings.push(format!(
            "seller.country '{}' has no GST table entry; the default rate will apply",
            country
        ));
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["platform", "platform_fee_percent"] => {
            Ok(config.platform.platform_fee_percent.to_string())
        }
        ["platform", "commission_percent"] => Ok(config.platform.commission_percent.to_string()),
        ["platform", "default_gst_percent"] => Ok(config.platform.default_gst_percent.to_string()),
        ["seller", "display_name"] => Ok(format!("\"{}\"", config.seller.display_name)),
        ["seller", "country"] => Ok(format!("\"{}\"", config.seller.country)),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["platform", "platform_fee_percent"] => {
            config.platform.platform_fee_percent = value.parse()?
        }
        ["platform", "commission_percent"] => config.platform.commission_percent = value.parse()?,
        ["platform", "default_gst_percent"] => {
            config.platform.default_gst_percent = value.parse()?
        }
        ["seller", "display_name"] => config.seller.display_name = value.to_string(),
        ["seller", "country"] => config.seller.country = value.to_uppercase(),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &std::path::Path) -> Result<String> {
    for name in &["vendora.toml", ".vendora.toml", "vendora.json"] {
        let path = cwd.join(name);
        if path.exists() {
            return Ok(path.to_string_lossy().to_string());
        }
    }
    bail!("No config file found. Run `vendora config init` to create one.")
}
