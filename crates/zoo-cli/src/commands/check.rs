use zoo_core::responses::ConstraintReport;
use zoo_engine::verify;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScopeArgs;
use crate::context::AppContext;
use crate::output::{Table, output_table};

/// Handle `zoo check`.
///
/// Failed constraints are part of the report, not an error: the command
/// still exits 0.
pub async fn handle(args: &ScopeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let report = verify::check_constraints(&snapshot, args.scope())?;
    if !report.ok {
        tracing::info!(failed = report.failed.len(), "constraint check found violations");
    }
    output_table(&report, flags.format, || report_table(&report))
}

/// One row per line: passed lines first, then failures, then the verdict.
pub fn report_table(report: &ConstraintReport) -> Table {
    let mut table = Table::new(["status", "check"]);
    for line in &report.passed {
        table.push([String::from("OK"), line.clone()]);
    }
    for line in &report.failed {
        table.push([String::from("FAIL"), line.clone()]);
    }
    let verdict = if report.ok { "OK" } else { "FAIL" };
    table.push([verdict.to_string(), String::from("Overall")]);
    table
}
