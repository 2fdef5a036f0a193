//! # zoo-config
//!
//! Layered configuration loading for the zoo manager using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ZOO_*` prefix, `__` as separator)
//! 2. Project-level `.zoo/config.toml`
//! 3. User-level `~/.config/zoo/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `ZOO_ASSIGN__MIN_SIZE` -> `assign.min_size`,
//! `ZOO_STORE__TRAIL` -> `store.trail`, and so on.
//!
//! ```no_run
//! use zoo_config::ZooConfig;
//!
//! let config = ZooConfig::load_with_dotenv().expect("config");
//! let policy = config.assign.policy();
//! println!("new enclosures start at {} m²", policy.min_size);
//! ```

mod assign;
mod error;
mod general;
mod store;

pub use assign::AssignConfig;
pub use error::ConfigError;
pub use general::{FormatSetting, GeneralConfig};
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project directory holding data and config.
pub const PROJECT_DIR: &str = ".zoo";

/// Name of the config file inside [`PROJECT_DIR`] and the user config dir.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZooConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assign: AssignConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl ZooConfig {
    /// Load configuration for the project in the current directory.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration for the project rooted at `project_root`.
    ///
    /// A `.env` next to `.zoo/` is read first, if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }
        Self::extract(Self::figment_for(project_root))
    }

    /// The figment provider chain for the current directory.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// The figment provider chain for the project rooted at `project_root`.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ZOO_").split("__"))
    }

    /// `<project_root>/.zoo/config.toml`.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join(CONFIG_FILE)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zoo").join(CONFIG_FILE))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assign.validate()?;
        self.store.validate()
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}
