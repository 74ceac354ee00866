//! Configuration Structures for the hopping vector generator
//!
//! Loaded from TOML or YAML, every section is optional.

use anyhow::{bail, Context};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HsgenConfig {
    /// Hopping parameters
    #[serde(default)]
    pub hopping: HoppingConfig,
    /// Mobile allocation
    #[serde(default)]
    pub allocation: AllocationConfig,
    /// Output options
    #[serde(default)]
    pub output: OutputConfig,
}

/// Hopping parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HoppingConfig {
    /// Hopping Sequence Number
    #[serde(default = "default_hsn")]
    pub hsn: u8,
    /// Single MAIO to enumerate, all of [0, N) when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maio: Option<u16>,
}

impl Default for HoppingConfig {
    fn default() -> Self {
        Self {
            hsn: default_hsn(),
            maio: None,
        }
    }
}

fn default_hsn() -> u8 {
    51
}

/// Mobile allocation configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AllocationConfig {
    /// ARFCNs in allocation order
    #[serde(default = "default_arfcns")]
    pub arfcns: Vec<u16>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            arfcns: default_arfcns(),
        }
    }
}

fn default_arfcns() -> Vec<u16> {
    vec![813, 820, 826, 850, 857, 880]
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Vector line format
    #[serde(default)]
    pub format: OutputFormat,
    /// Only report the consistency summary
    #[serde(default)]
    pub summary_only: bool,
}

/// Vector line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab separated text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl HsgenConfig {
    /// Load configuration from a TOML or YAML file, chosen by extension
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path))?;

        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match extension {
            "toml" => Self::from_toml_str(&contents),
            "yml" | "yaml" => Self::from_yaml_str(&contents),
            _ => bail!("Unsupported configuration format: {}", path),
        }
    }

    /// Parse TOML configuration
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("Invalid TOML configuration")
    }

    /// Parse YAML configuration
    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(contents).context("Invalid YAML configuration")
    }

    /// Parse a comma separated ARFCN list (e.g., "813,820,826")
    pub fn parse_arfcn_list(list: &str) -> anyhow::Result<Vec<u16>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u16>()
                    .with_context(|| format!("Invalid ARFCN: {}", s))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = HsgenConfig::default();
        assert_eq!(config.hopping.hsn, 51);
        assert_eq!(config.hopping.maio, None);
        assert_eq!(config.allocation.arfcns, vec![813, 820, 826, 850, 857, 880]);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.summary_only);
    }

    #[test]
    fn test_toml_config() {
        let config = HsgenConfig::from_toml_str(
            r#"
            [hopping]
            hsn = 0
            maio = 2

            [allocation]
            arfcns = [1, 2, 3]

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.hopping.hsn, 0);
        assert_eq!(config.hopping.maio, Some(2));
        assert_eq!(config.allocation.arfcns, vec![1, 2, 3]);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_config() {
        let config = HsgenConfig::from_toml_str("[hopping]\nhsn = 7\n").unwrap();
        assert_eq!(config.hopping.hsn, 7);
        assert_eq!(config.allocation, AllocationConfig::default());
    }

    #[test]
    fn test_yaml_config() {
        let config = HsgenConfig::from_yaml_str(
            "hopping:\n  hsn: 1\nallocation:\n  arfcns: [10, 20]\noutput:\n  summary_only: true\n",
        )
        .unwrap();

        assert_eq!(config.hopping.hsn, 1);
        assert_eq!(config.allocation.arfcns, vec![10, 20]);
        assert!(config.output.summary_only);
    }

    #[test]
    fn test_parse_arfcn_list() {
        assert_eq!(
            HsgenConfig::parse_arfcn_list("813, 820,826").unwrap(),
            vec![813, 820, 826]
        );
        assert!(HsgenConfig::parse_arfcn_list("813,abc").is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(HsgenConfig::from_file("missing.ini").is_err());
    }
}
