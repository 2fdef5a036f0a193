use serde::Serialize;
use zoo_core::entities::Enclosure;
use zoo_engine::feasibility::space_used;
use zoo_engine::units::format_area;
use zoo_engine::{ZooSnapshot, verify};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EnclosureCommands;
use crate::context::AppContext;
use crate::output::{Table, output_table};

#[derive(Debug, Serialize)]
struct EnclosureRow<'a> {
    #[serde(flatten)]
    enclosure: &'a Enclosure,
    space_used: f64,
    occupants: usize,
    ok: bool,
}

#[derive(Debug, Serialize)]
struct EnclosureListResponse<'a> {
    enclosures: Vec<EnclosureRow<'a>>,
}

/// Handle `zoo enclosure`.
pub async fn handle(
    action: &EnclosureCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EnclosureCommands::List => list(ctx, flags).await,
    }
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let response = EnclosureListResponse {
        enclosures: rows(&snapshot)?,
    };

    output_table(&response, flags.format, || {
        let mut table = Table::new([
            "id", "name", "climate", "habitat", "security", "used", "size", "animals", "status",
        ]);
        for row in &response.enclosures {
            table.push([
                row.enclosure.id.to_string(),
                row.enclosure.name.clone(),
                row.enclosure.climate.to_string(),
                row.enclosure.habitat.to_string(),
                row.enclosure.security_level.to_string(),
                format_area(row.space_used),
                format_area(row.enclosure.size),
                row.occupants.to_string(),
                String::from(if row.ok { "OK" } else { "FAIL" }),
            ]);
        }
        table
    })
}

fn rows(snapshot: &ZooSnapshot) -> anyhow::Result<Vec<EnclosureRow<'_>>> {
    snapshot
        .enclosures_by_name()
        .into_iter()
        .map(|enclosure| {
            let occupants = snapshot.occupants(enclosure.id);
            Ok(EnclosureRow {
                enclosure,
                space_used: space_used(occupants.iter().copied()),
                occupants: occupants.len(),
                ok: verify::check_enclosure(snapshot, enclosure.id)?.ok,
            })
        })
        .collect()
}
