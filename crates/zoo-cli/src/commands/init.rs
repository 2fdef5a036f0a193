use std::path::Path;

use anyhow::{Context, bail};
use serde::Serialize;
use zoo_config::ZooConfig;
use zoo_store::ZooStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::commands::import::read_snapshot;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    project: String,
    data_file: String,
    config_file: String,
    seeded_from: Option<String>,
    status: &'static str,
}

/// Handle `zoo init`.
pub async fn handle(
    args: &InitArgs,
    project_root: &Path,
    config: &ZooConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(project_root)
        .await
        .with_context(|| format!("failed to create {}", project_root.display()))?;
    if ZooStore::is_initialized(project_root, &config.store) {
        bail!("a zoo already exists at {}", project_root.display());
    }

    // Parse the seed before touching the project so a bad file leaves nothing behind.
    let seed = match &args.from {
        Some(path) => Some(read_snapshot(Path::new(path)).await?),
        None => None,
    };

    let store = ZooStore::init(project_root, &config.store).await?;
    let config_file = ZooConfig::project_config_path(project_root);
    if !config_file.exists() {
        let rendered = toml::to_string_pretty(&ZooConfig::default())
            .context("failed to render default config")?;
        tokio::fs::write(&config_file, rendered)
            .await
            .with_context(|| format!("failed to write {}", config_file.display()))?;
    }

    if let Some(snapshot) = &seed {
        store.replace(snapshot).await?;
    }

    output(
        &InitResponse {
            project: project_root.display().to_string(),
            data_file: store.data_path().display().to_string(),
            config_file: config_file.display().to_string(),
            seeded_from: args.from.clone(),
            status: "initialized",
        },
        flags.format,
    )
}
