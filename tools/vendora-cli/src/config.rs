//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vendora_listing::PlatformConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Platform fee and tax defaults applied to new listings.
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Seller account settings.
    #[serde(default)]
    pub seller: SellerConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Seller account settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerConfig {
    /// Display name shown on listings.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Default primary country for new listings.
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_display_name() -> String {
    "Vendora Seller".to_string()
}

fn default_country() -> String {
    "IN".to_string()
}

impl Default for SellerConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            country: default_country(),
        }
    }
}

/// Generate a default vendora.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Vendora seller configuration

[platform]
platform_fee_percent = 7.5
commission_percent = 0.5
default_gst_percent = 18.0

[seller]
display_name = "{name}"
country = "IN"
"#,
        name = name
    )
}
