use serde::Serialize;
use zoo_core::entities::Category;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output::{Table, output_table};

#[derive(Debug, Serialize)]
struct CategoryRow<'a> {
    #[serde(flatten)]
    category: &'a Category,
    animals: usize,
}

#[derive(Debug, Serialize)]
struct CategoryListResponse<'a> {
    categories: Vec<CategoryRow<'a>>,
}

/// Handle `zoo category`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => list(ctx, flags).await,
    }
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let mut categories = snapshot
        .categories
        .iter()
        .map(|category| CategoryRow {
            category,
            animals: snapshot
                .animals
                .iter()
                .filter(|animal| animal.category_id == Some(category.id))
                .count(),
        })
        .collect::<Vec<_>>();
    categories.sort_by(|a, b| a.category.name.cmp(&b.category.name));
    let response = CategoryListResponse { categories };

    output_table(&response, flags.format, || {
        let mut table = Table::new(["id", "name", "animals"]);
        for row in &response.categories {
            table.push([
                row.category.id.to_string(),
                row.category.name.clone(),
                row.animals.to_string(),
            ]);
        }
        table
    })
}
