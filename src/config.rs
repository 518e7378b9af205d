//! Repository configuration for basepick.
//!
//! Provides JSON-based configuration through `<config-dir>/repositories.json`,
//! covering registry defaults, tag filtering rules, and the repository groups
//! to scan.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::recommendation::services::reference::DEFAULT_REGISTRY;
use crate::recommendation::services::TagFilter;
use crate::shared::error::ScanError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "repositories.json";

/// Top-level configuration file schema.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryConfig {
    pub defaults: ConfigDefaults,
    pub tag_filter: TagFilter,
    pub repositories: Vec<RepositoryGroup>,
}

/// Default values applied to every repository in the file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigDefaults {
    pub registry: String,
    pub max_tags: i32,
}

/// A set of related image sources, rendered as one block in the report.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryGroup {
    pub description: String,
    pub images: Vec<String>,
}

impl RepositoryConfig {
    /// Built-in configuration used when no repositories.json exists.
    pub fn built_in() -> Self {
        Self {
            defaults: ConfigDefaults {
                registry: DEFAULT_REGISTRY.to_string(),
                max_tags: 0,
            },
            tag_filter: TagFilter::default(),
            repositories: vec![
                RepositoryGroup {
                    description: "Azure Linux base images".to_string(),
                    images: ["azurelinux/base/python", "azurelinux/base/nodejs"]
                        .map(String::from)
                        .to_vec(),
                },
                RepositoryGroup {
                    description: "Azure Linux distroless images".to_string(),
                    images: [
                        "azurelinux/distroless/base",
                        "azurelinux/distroless/python",
                        "azurelinux/distroless/nodejs",
                    ]
                    .map(String::from)
                    .to_vec(),
                },
            ],
        }
    }

    /// Effective per-repository tag limit. An explicit CLI value wins; zero
    /// falls back to the configured default; zero overall means no limit.
    pub fn resolve_max_tags(&self, cli_max_tags: i32) -> i32 {
        if cli_max_tags == 0 && self.defaults.max_tags > 0 {
            return self.defaults.max_tags;
        }
        cli_max_tags
    }

    /// Every configured image entry across all groups, in file order.
    pub fn all_images(&self) -> Vec<String> {
        self.repositories
            .iter()
            .flat_map(|group| group.images.iter().cloned())
            .collect()
    }
}

/// Load configuration from `<config_dir>/repositories.json`.
///
/// A missing file is not an error: the built-in defaults cover the Azure
/// Linux base and distroless repositories. A file that exists but cannot be
/// read or parsed is fatal.
pub fn load_repository_config(config_dir: &Path) -> Result<RepositoryConfig> {
    let path = config_dir.join(CONFIG_FILENAME);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "no repositories.json found, using defaults");
            return Ok(RepositoryConfig::built_in());
        }
        Err(e) => {
            return Err(ScanError::ConfigError {
                path,
                reason: e.to_string(),
                hint: "Check that the configuration file is readable".to_string(),
            }
            .into());
        }
    };

    let mut config: RepositoryConfig =
        serde_json::from_str(&content).map_err(|e| ScanError::ConfigError {
            path: path.clone(),
            reason: e.to_string(),
            hint: "Ensure the file contains valid JSON".to_string(),
        })?;

    if config.defaults.registry.is_empty() {
        config.defaults.registry = DEFAULT_REGISTRY.to_string();
    }

    // An entirely empty filter block means "use the defaults", so a config
    // that only lists repositories still gets sane tag filtering.
    if config.tag_filter.is_empty() {
        config.tag_filter = TagFilter::default();
    }

    Ok(config)
}
