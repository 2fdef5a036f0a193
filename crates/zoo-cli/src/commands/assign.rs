use serde::Serialize;
use zoo_core::enums::AssignMode;
use zoo_core::responses::AssignmentSummary;
use zoo_engine::AssignmentPlan;
use zoo_engine::assign::auto_assign;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssignArgs;
use crate::context::AppContext;
use crate::output::{Table, output_table};

#[derive(Debug, Serialize)]
struct AssignResponse {
    dry_run: bool,
    committed: bool,
    summary: AssignmentSummary,
    /// Only present on dry runs, so the plan can be inspected.
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<AssignmentPlan>,
}

/// Handle `zoo assign`.
pub async fn handle(args: &AssignArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mode = AssignMode::from(args.mode);
    let snapshot = ctx.snapshot().await?;
    let policy = ctx.config.assign.policy();
    let outcome = auto_assign(&snapshot, mode, &policy);

    let committed = if args.dry_run || outcome.plan.is_empty() {
        false
    } else {
        ctx.store.commit_plan(&outcome.plan).await?;
        true
    };

    let response = AssignResponse {
        dry_run: args.dry_run,
        committed,
        summary: outcome.summary,
        plan: args.dry_run.then_some(outcome.plan),
    };
    output_table(&response, flags.format, || log_table(&response))
}

fn log_table(response: &AssignResponse) -> Table {
    let mut table = Table::new(["step", "action"]);
    for (index, line) in response.summary.log.iter().enumerate() {
        table.push([(index + 1).to_string(), line.clone()]);
    }
    if response.dry_run {
        table.push([String::from("-"), String::from("Dry run: nothing committed")]);
    }
    table
}

#[cfg(test)]
mod tests {
    use zoo_core::enums::AssignMode;
    use zoo_core::responses::AssignmentSummary;

    use super::{AssignResponse, log_table};
    use crate::output::table::TableOptions;

    #[test]
    fn dry_run_is_called_out_after_the_log() {
        let response = AssignResponse {
            dry_run: true,
            committed: false,
            summary: AssignmentSummary {
                mode: AssignMode::Finish,
                assigned_count: 0,
                created_count: 0,
                log: vec![String::from("Assigned 0 animal(s), created 0 enclosure(s)")],
            },
            plan: None,
        };
        let rendered = log_table(&response).render(TableOptions {
            max_width: None,
            color: false,
        });
        let last = rendered.lines().last().expect("rows");
        assert!(last.ends_with("Dry run: nothing committed"));
        assert!(rendered.contains("   1  Assigned 0 animal(s)"));
    }
}
