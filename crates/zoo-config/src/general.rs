//! General application configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format used when `--format` is not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Json,
    #[default]
    Table,
    Raw,
}

impl fmt::Display for FormatSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Table => "table",
            Self::Raw => "raw",
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub default_format: FormatSetting,
}
