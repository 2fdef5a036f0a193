use serde::Serialize;
use zoo_core::responses::ActionLine;
use zoo_engine::behavior::{self, DayPhase};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScopeArgs;
use crate::context::AppContext;
use crate::output::{Table, output_table};

/// The daily routines `zoo` can describe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Routine {
    Sunrise,
    Sunset,
    Feed,
}

#[derive(Debug, Serialize)]
struct RoutineResponse {
    routine: Routine,
    lines: Vec<ActionLine>,
}

/// Handle `zoo sunrise`, `zoo sunset`, and `zoo feed`.
pub async fn handle(
    routine: Routine,
    args: &ScopeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let scope = args.scope();
    let lines = match routine {
        Routine::Sunrise => behavior::day_phase_report(&snapshot, scope, DayPhase::Sunrise)?,
        Routine::Sunset => behavior::day_phase_report(&snapshot, scope, DayPhase::Sunset)?,
        Routine::Feed => behavior::feeding_report(&snapshot, scope)?,
    };
    tracing::debug!(?routine, %scope, lines = lines.len(), "described routine");

    let response = RoutineResponse { routine, lines };
    output_table(&response, flags.format, || lines_table(&response.lines))
}

fn lines_table(lines: &[ActionLine]) -> Table {
    let mut table = Table::new(["enclosure", "animal", "species", "action"]);
    for line in lines {
        table.push([
            line.enclosure
                .clone()
                .unwrap_or_else(|| String::from("Unassigned")),
            line.animal.clone(),
            line.species.clone(),
            line.message.clone(),
        ]);
    }
    table
}
