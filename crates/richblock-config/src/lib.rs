use richblock_engine::{
    BlockError, BlockType, CharacterListPolicy, ContentBlockNode, ContentBlockNodeConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the default config file location.
pub const CONFIG_PATH_VAR: &str = "RICHBLOCK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Block construction settings shared by every component that builds blocks
/// from external input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How to treat a character list whose length disagrees with its text.
    pub character_list_policy: CharacterListPolicy,
    /// Block type given to blocks built without one.
    pub default_block_type: BlockType,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$RICHBLOCK_CONFIG` if set (with `~` and variables expanded), else
    /// `~/.config/richblock/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(overridden) = std::env::var(CONFIG_PATH_VAR) {
            let overridden = PathBuf::from(overridden);
            return Self::expand_path(&overridden).unwrap_or(overridden);
        }
        let config_dir = shellexpand::tilde("~/.config/richblock");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Builds a node with the configured default block type and character
    /// list policy. Fields set on `config` take precedence.
    pub fn build_node(
        &self,
        mut config: ContentBlockNodeConfig,
    ) -> Result<ContentBlockNode, BlockError> {
        if config.block.block_type.is_none() {
            config.block.block_type = Some(self.default_block_type.clone());
        }
        ContentBlockNode::with_policy(config, self.character_list_policy)
    }
}
