//! Commander configuration
//!
//! Stored in `~/.config/commander/config.yaml`:
//!
//! ```yaml
//! default_bindings: true
//! keymap: ~/dotfiles/commander-keys.yaml
//! projects:
//!   - name: notes
//!     path: /home/me/notes
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::controller::Project;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommanderConfig {
    /// Start from the embedded default keymap
    #[serde(default = "default_true")]
    pub default_bindings: bool,

    /// Extra keymap file layered over all others
    #[serde(default)]
    pub keymap: Option<PathBuf>,

    /// Projects to show in the navigator at startup
    #[serde(default)]
    pub projects: Vec<Project>,
}

fn default_true() -> bool {
    true
}

impl Default for CommanderConfig {
    fn default() -> Self {
        Self {
            default_bindings: true,
            keymap: None,
            projects: Vec::new(),
        }
    }
}

impl CommanderConfig {
    /// Load config from the config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML config, expanding `~` in paths
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(yaml)?;
        if let Some(keymap) = config.keymap.take() {
            config.keymap = Some(crate::command::expand_home(&keymap.to_string_lossy()));
        }
        for project in &mut config.projects {
            project.path = crate::command::expand_home(&project.path.to_string_lossy());
        }
        Ok(config)
    }

    /// Save config to disk, creating the config directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| anyhow::anyhow!("No config directory available"))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
