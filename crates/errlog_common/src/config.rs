//! Scan configuration
//!
//! Loaded from an optional TOML file. Missing fields fall back to defaults,
//! and the CLI overrides individual fields afterwards.
//!
//! ```toml
//! base_dir = "/srv/project"
//! extensions = ["go"]
//! title = "Error summary"
//!
//! [rule]
//! kind = "marker"
//! marker = "error:"
//! ```

use crate::error::{Result, ScanError};
use crate::matcher::MatchRule;
use crate::report::DEFAULT_TITLE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory listed paths are resolved against
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Recognised source extensions, case-insensitive
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Report title
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub rule: MatchRule,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            extensions: default_extensions(),
            title: default_title(),
            rule: MatchRule::default(),
        }
    }
}

impl ScanConfig {
    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&content).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.base_dir, PathBuf::from("."));
        assert_eq!(config.extensions, vec!["go"]);
        assert_eq!(config.title, "相关错误信息汇总");
        assert_eq!(config.rule, MatchRule::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ScanConfig::from_toml("").unwrap(), ScanConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ScanConfig::from_toml(
            "extensions = [\"go\", \"rs\"]\n\n[rule]\nkind = \"regex\"\npattern = \"panic\"\n",
        )
        .unwrap();
        assert_eq!(config.extensions, vec!["go", "rs"]);
        assert_eq!(config.base_dir, PathBuf::from("."));
        assert!(matches!(config.rule, MatchRule::Regex { .. }));
    }

    #[test]
    fn test_load_errors_are_config_errors() {
        let dir = tempfile::TempDir::new().unwrap();

        let missing = dir.path().join("missing.toml");
        let err = ScanConfig::load_from_path(&missing).unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "extensions = 3\n").unwrap();
        let err = ScanConfig::load_from_path(&bad).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
