use serde::Serialize;
use zoo_core::responses::ZooStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusResponse {
    project: String,
    #[serde(flatten)]
    status: ZooStatus,
}

/// Handle `zoo status`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let response = StatusResponse {
        project: ctx.project_root.display().to_string(),
        status: snapshot.status(),
    };
    output(&response, flags.format)
}
