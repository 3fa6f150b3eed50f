use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::is_yaml;

/// How invalid identifier characters are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharPolicy {
    /// `InvalidNameFirstChar` and `InvalidNameChars` as separate diagnostics.
    #[default]
    Split,
    /// One `InvalidCharacters` diagnostic for all offenders.
    Merged,
}

/// Which fields of a name spec must agree across an override chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideEquality {
    /// Primary and secondary names only.
    Names,
    /// Names and the `exact` flag.
    #[default]
    NamesAndExact,
}

impl OverrideEquality {
    pub fn compares_exact(self) -> bool {
        matches!(self, OverrideEquality::NamesAndExact)
    }
}

/// Policy knobs of the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub char_policy: CharPolicy,
    #[serde(default)]
    pub override_equality: OverrideEquality,
}

/// Decoration applied when building the exported interface model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Prefix for exported class names that are not `exact`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_prefix: Option<String>,
}

/// Serializable configuration file: checker policy plus export decoration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamecheckConfig {
    /// Config format version.
    #[serde(default = "default_config_version")]
    pub config_version: String,
    #[serde(default)]
    pub checker: CheckerConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_config_version() -> String {
    "0.1.0".to_string()
}

impl NamecheckConfig {
    pub fn new() -> Self {
        Self { config_version: default_config_version(), ..Self::default() }
    }
}

/// Read a config file; YAML for `.yaml`/`.yml`, JSON otherwise.
pub fn load_config(path: &Path) -> Result<NamecheckConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&text).context("Failed to parse config YAML")
    } else {
        serde_json::from_str(&text).context("Failed to parse config JSON")
    }
}

/// Serialize a config in the format implied by the path's extension.
pub fn render_config(path: &Path, config: &NamecheckConfig) -> Result<String> {
    if is_yaml(path) {
        serde_yaml::to_string(config).context("Failed to serialize config YAML")
    } else {
        serde_json::to_string_pretty(config).context("Failed to serialize config JSON")
    }
}
