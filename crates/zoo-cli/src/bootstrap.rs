use std::path::Path;

use anyhow::Context;
use zoo_config::ZooConfig;

/// Load layered config for `project_root`, including its `.env` if present.
pub fn load_config(project_root: &Path) -> anyhow::Result<ZooConfig> {
    let config = ZooConfig::load_from(project_root).with_context(|| {
        format!(
            "failed to load configuration for {}",
            project_root.display()
        )
    })?;
    tracing::debug!(
        format = %config.general.default_format,
        data_file = %config.store.data_file,
        trail = config.store.trail,
        "loaded configuration"
    );
    Ok(config)
}
