//! Snapshot storage configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_data_file() -> String {
    "zoo.json".to_string()
}

const fn default_trail() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Snapshot file name inside the `.zoo/` directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Whether to append committed changes to `trail.jsonl`.
    #[serde(default = "default_trail")]
    pub trail: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            trail: default_trail(),
        }
    }
}

impl StoreConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `data_file` is empty or not a bare file name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.data_file.trim();
        if name.is_empty() {
            return Err(ConfigError::invalid("store.data_file", "must not be empty"));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ConfigError::invalid(
                "store.data_file",
                format!("must be a file name inside .zoo/, got '{name}'"),
            ));
        }
        Ok(())
    }
}
