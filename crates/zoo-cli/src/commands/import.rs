use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use zoo_core::responses::ZooStatus;
use zoo_engine::ZooSnapshot;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportResponse {
    source: String,
    #[serde(flatten)]
    status: ZooStatus,
}

/// Handle `zoo import`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = read_snapshot(Path::new(&args.path)).await?;
    ctx.store
        .replace(&snapshot)
        .await
        .with_context(|| format!("failed to import {}", args.path))?;

    output(
        &ImportResponse {
            source: args.path.clone(),
            status: snapshot.status(),
        },
        flags.format,
    )
}

/// Read and validate a snapshot file.
pub async fn read_snapshot(path: &Path) -> anyhow::Result<ZooSnapshot> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot: ZooSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    snapshot
        .validate()
        .with_context(|| format!("{} is not a consistent zoo", path.display()))?;
    Ok(snapshot)
}
