//! Configuration management for the ATS checker

use crate::error::{AtsCheckerError, Result};
use crate::processing::format_scorer::FormatRule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// One stopword per line; the built-in English list when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords_file: Option<PathBuf>,
    #[serde(default = "FormatRule::defaults")]
    pub format_rules: Vec<FormatRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub color_output: bool,
    #[serde(default = "default_true")]
    pub show_tip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

fn default_true() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords_file: None,
            format_rules: FormatRule::defaults(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            show_tip: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AtsCheckerError::Configuration(format!(
                "Failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsCheckerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AtsCheckerError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-checker")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        for rule in &self.analysis.format_rules {
            if rule.pattern.is_empty() {
                return Err(AtsCheckerError::Configuration(format!(
                    "Format rule '{}' has an empty pattern",
                    rule.name
                )));
            }
            if rule.penalty > 100 {
                return Err(AtsCheckerError::Configuration(format!(
                    "Format rule '{}' penalty {} exceeds 100",
                    rule.name, rule.penalty
                )));
            }
        }

        if let Some(path) = &self.analysis.stopwords_file {
            if path.as_os_str().is_empty() {
                return Err(AtsCheckerError::Configuration(
                    "stopwords_file must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
