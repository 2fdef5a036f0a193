use schemars::{Schema, schema_for};
use zoo_engine::{AssignmentPlan, ZooSnapshot};
use zoo_store::TrailRecord;

use crate::cli::root_commands::{SchemaArgs, SchemaTarget};

/// Handle `zoo schema`. Always JSON, regardless of `--format`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&schema(args.target))?);
    Ok(())
}

fn schema(target: SchemaTarget) -> Schema {
    match target {
        SchemaTarget::Snapshot => schema_for!(ZooSnapshot),
        SchemaTarget::Trail => schema_for!(TrailRecord),
        SchemaTarget::Plan => schema_for!(AssignmentPlan),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::schema;
    use crate::cli::root_commands::SchemaTarget;

    #[rstest]
    #[case(SchemaTarget::Snapshot, "ZooSnapshot")]
    #[case(SchemaTarget::Trail, "TrailRecord")]
    #[case(SchemaTarget::Plan, "AssignmentPlan")]
    fn schemas_are_titled(#[case] target: SchemaTarget, #[case] title: &str) {
        let value = serde_json::to_value(schema(target)).unwrap();
        assert_eq!(value["title"], json!(title));
    }
}
