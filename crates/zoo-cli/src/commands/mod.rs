pub mod animal;
pub mod assign;
pub mod category;
pub mod check;
pub mod dispatch;
pub mod enclosure;
pub mod import;
pub mod init;
pub mod routine;
pub mod schema;
pub mod status;

use zoo_core::entities::Animal;
use zoo_engine::ZooSnapshot;

/// Table cell for where an animal lives.
fn placement_label(snapshot: &ZooSnapshot, animal: &Animal) -> String {
    match (animal.enclosure_id, snapshot.placed_enclosure(animal)) {
        (_, Some(enclosure)) => enclosure.name.clone(),
        (Some(missing), None) => format!("(enclosure {missing} missing)"),
        (None, None) => String::from("unassigned"),
    }
}
