//! Platform-level listing defaults.

use serde::{Deserialize, Serialize};

/// Platform configuration for new listings.
///
/// Seeds the fee and tax fields of a fresh draft; every seeded value
/// remains editable per listing afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformConfig {
    /// Platform fee charged on the selling price, in percent.
    #[serde(default = "default_platform_fee")]
    pub platform_fee_percent: f64,
    /// Marketplace commission on the selling price, in percent.
    #[serde(default = "default_commission")]
    pub commission_percent: f64,
    /// GST rate used when the primary country has no table entry, in percent.
    #[serde(default = "default_gst")]
    pub default_gst_percent: f64,
}

fn default_platform_fee() -> f64 {
    7.5
}

fn default_commission() -> f64 {
    0.5
}

fn default_gst() -> f64 {
    18.0
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            platform_fee_percent: default_platform_fee(),
            commission_percent: default_commission(),
            default_gst_percent: default_gst(),
        }
    }
}

impl PlatformConfig {
    /// Set the platform fee percentage.
    pub fn with_platform_fee(mut self, percent: f64) -> Self {
        self.platform_fee_percent = percent;
        self
    }

    /// Set the commission percentage.
    pub fn with_commission(mut self, percent: f64) -> Self {
        self.commission_percent = percent;
        self
    }

    /// Set the fallback GST percentage.
    pub fn with_default_gst(mut self, percent: f64) -> Self {
        self.default_gst_percent = percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlatformConfig::default();
        assert_eq!(config.platform_fee_percent, 7.5);
        assert_eq!(config.commission_percent, 0.5);
        assert_eq!(config.default_gst_percent, 18.0);
    }

    #[test]
    fn test_builder_methods() {
        let config = PlatformConfig::default()
            .with_platform_fee(5.0)
            .with_commission(1.0)
            .with_default_gst(12.0);
        assert_eq!(config.platform_fee_percent, 5.0);
        assert_eq!(config.commission_percent, 1.0);
        assert_eq!(config.default_gst_percent, 12.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: PlatformConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PlatformConfig::default());
    }
}
