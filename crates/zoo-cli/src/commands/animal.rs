use serde::Serialize;
use zoo_core::entities::Animal;
use zoo_core::ids::{AnimalId, EnclosureId};
use zoo_core::responses::ConstraintReport;
use zoo_engine::{ZooSnapshot, plan, verify};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnimalCommands;
use crate::commands::check::report_table;
use crate::commands::placement_label;
use crate::context::AppContext;
use crate::output::{Table, output_table};

#[derive(Debug, Serialize)]
struct AnimalListResponse<'a> {
    animals: Vec<&'a Animal>,
}

#[derive(Debug, Serialize)]
struct MoveResponse {
    animal_id: AnimalId,
    enclosure_id: Option<EnclosureId>,
    report: ConstraintReport,
}

/// Handle `zoo animal`.
pub async fn handle(
    action: &AnimalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnimalCommands::List {
            unassigned,
            enclosure,
        } => list(*unassigned, *enclosure, ctx, flags).await,
        AnimalCommands::Move { id, to, unassign } => {
            let target = if *unassign { None } else { *to };
            move_animal(*id, target, ctx, flags).await
        }
    }
}

async fn list(
    unassigned: bool,
    enclosure: Option<EnclosureId>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let animals = select(&snapshot, unassigned, enclosure)?;
    let response = AnimalListResponse { animals };

    output_table(&response, flags.format, || {
        let mut table = Table::new([
            "id", "name", "species", "diet", "activity", "space", "security", "enclosure", "prey",
        ]);
        for animal in &response.animals {
            let prey = snapshot
                .prey_of(animal)
                .map_or_else(|| String::from("-"), |prey| prey.name.clone());
            table.push([
                animal.id.to_string(),
                animal.name.clone(),
                animal.species.clone(),
                animal.dietary_class.to_string(),
                animal.activity_pattern.to_string(),
                zoo_engine::units::format_area(animal.space_requirement),
                animal.security_requirement.to_string(),
                placement_label(&snapshot, animal),
                prey,
            ]);
        }
        table
    })
}

fn select(
    snapshot: &ZooSnapshot,
    unassigned: bool,
    enclosure: Option<EnclosureId>,
) -> anyhow::Result<Vec<&Animal>> {
    let mut animals = match enclosure {
        Some(id) => {
            snapshot.require_enclosure(id)?;
            snapshot.occupants(id)
        }
        None => snapshot.animals.iter().collect(),
    };
    if unassigned {
        animals.retain(|animal| snapshot.is_unassigned(animal));
    }
    animals.sort_by_key(|animal| animal.id);
    Ok(animals)
}

async fn move_animal(
    id: AnimalId,
    target: Option<EnclosureId>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let change = plan::reassign(&snapshot, id, target)?;
    let committed = ctx.store.commit_reassignment(&change).await?;
    let report = verify::check_animal(&committed, id)?;

    let response = MoveResponse {
        animal_id: id,
        enclosure_id: target,
        report,
    };
    output_table(&response, flags.format, || report_table(&response.report))
}
