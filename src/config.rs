use crate::error::{GitFlowError, Result};
use crate::git::{Git2TagChecker, NoTagChecker, TagExistenceChecker};
use crate::resolve::ResolutionInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for git-flow.
///
/// Contains the placeholder-to-version table and the tag lookup settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Placeholder -> resolved version (e.g., "0.0.0-DEFAULT" = "2.0.0")
    #[serde(default)]
    pub versions: HashMap<String, String>,

    #[serde(default)]
    pub tags: TagsConfig,
}

/// Where tag existence answers come from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagSource {
    /// Every tag is reported as absent
    #[default]
    None,
    /// Tags are looked up in a local git repository
    Git,
}

/// Configuration for tag existence lookups.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TagsConfig {
    #[serde(default)]
    pub source: TagSource,

    /// Path the repository is discovered from; defaults to the current directory
    #[serde(default)]
    pub repository: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GitFlowError::config(e.to_string()))
    }

    /// Builds a resolution input from the `[versions]` table.
    pub fn resolution_input(
        &self,
        placeholder: impl Into<String>,
        branch: impl Into<String>,
        run_number: Option<u64>,
    ) -> ResolutionInput {
        ResolutionInput {
            run_number,
            ..ResolutionInput::new(placeholder, branch, self.versions.clone())
        }
    }

    /// Binds the configured tag checker.
    ///
    /// # Returns
    /// * `Ok(checker)` - Stub or git-backed checker
    /// * `Err` - If `source = "git"` and no repository can be discovered
    pub fn tag_checker(&self) -> Result<Box<dyn TagExistenceChecker>> {
        match self.tags.source {
            TagSource::None => Ok(Box::new(NoTagChecker)),
            TagSource::Git => {
                let path = self
                    .tags
                    .repository
                    .as_deref()
                    .unwrap_or_else(|| Path::new("."));
                Ok(Box::new(Git2TagChecker::open(path)?))
            }
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitflow.toml` in current directory
/// 3. `~/.config/.gitflow.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitflow.toml").exists() {
        fs::read_to_string("./gitflow.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitflow.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.versions.is_empty());
        assert_eq!(config.tags.source, TagSource::None);
        assert_eq!(config.tags.repository, None);
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
[versions]
"0.0.0-DEFAULT" = "2.0.0"
"0.0.0-BETA" = "2.0.0-beta.0"

[tags]
source = "git"
repository = "/srv/repo"
"#,
        )
        .unwrap();

        assert_eq!(config.versions.get("0.0.0-DEFAULT"), Some(&"2.0.0".to_string()));
        assert_eq!(config.versions.len(), 2);
        assert_eq!(config.tags.source, TagSource::Git);
        assert_eq!(config.tags.repository, Some(PathBuf::from("/srv/repo")));
    }

    #[test]
    fn test_from_toml_missing_sections_use_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_source() {
        let err = Config::from_toml("[tags]\nsource = \"svn\"\n").unwrap_err();
        assert!(matches!(err, GitFlowError::Config(_)));
    }

    #[test]
    fn test_resolution_input() {
        let mut config = Config::default();
        config
            .versions
            .insert("0.0.0-DEFAULT".to_string(), "2.0.0".to_string());

        let input = config.resolution_input("0.0.0-DEFAULT", "main", Some(9));
        assert_eq!(input.placeholder, "0.0.0-DEFAULT");
        assert_eq!(input.branch, "main");
        assert_eq!(input.run_number, Some(9));
        assert_eq!(input.versions_by_placeholder, config.versions);
    }

    #[tokio::test]
    async fn test_default_tag_checker_is_stub() {
        let checker = Config::default().tag_checker().unwrap();
        assert!(!checker.tag_exists("v2.0.0").await.unwrap());
    }
}
