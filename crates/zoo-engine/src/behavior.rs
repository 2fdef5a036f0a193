//! Sunrise, sunset, and feeding text.
//!
//! All functions are pure. Unknown activity patterns and diets fall through to
//! a default line; they are never errors.

use zoo_core::entities::Animal;
use zoo_core::enums::{ActivityPattern, DietaryClass};
use zoo_core::errors::CoreError;
use zoo_core::responses::ActionLine;

use crate::scope::Scope;
use crate::snapshot::ZooSnapshot;

/// Which end of the day to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Sunrise,
    Sunset,
}

/// What `animal` does at sunrise.
#[must_use]
pub fn describe_sunrise(animal: &Animal) -> String {
    describe_phase(animal, DayPhase::Sunrise)
}

/// What `animal` does at sunset.
#[must_use]
pub fn describe_sunset(animal: &Animal) -> String {
    describe_phase(animal, DayPhase::Sunset)
}

#[must_use]
pub fn describe_phase(animal: &Animal, phase: DayPhase) -> String {
    let name = &animal.name;
    match (animal.activity_pattern, phase) {
        (ActivityPattern::Diurnal, DayPhase::Sunrise)
        | (ActivityPattern::Nocturnal, DayPhase::Sunset) => format!("{name} wakes up"),
        (ActivityPattern::Diurnal, DayPhase::Sunset)
        | (ActivityPattern::Nocturnal, DayPhase::Sunrise) => format!("{name} goes to sleep"),
        (ActivityPattern::Cathemeral, _) => format!("{name} stays active"),
        (ActivityPattern::Unknown, _) => {
            format!("{name} has an unknown activity pattern; no change")
        }
    }
}

/// What `animal` eats right now.
///
/// A designated prey sharing the animal's enclosure takes precedence over the
/// dietary class. Unassigned animals never eat their prey.
#[must_use]
pub fn describe_feeding(snapshot: &ZooSnapshot, animal: &Animal) -> String {
    let name = &animal.name;
    if let Some(prey) = co_located_prey(snapshot, animal) {
        return format!("{name} eats {} ({})", prey.name, prey.species);
    }

    match animal.dietary_class {
        DietaryClass::Carnivore => format!("{name} eats meat"),
        DietaryClass::Herbivore => format!("{name} eats plants"),
        DietaryClass::Omnivore => format!("{name} eats plants and meat"),
        DietaryClass::Insectivore => format!("{name} eats insects"),
        DietaryClass::Piscivore => format!("{name} eats fish"),
        DietaryClass::Unknown => format!("{name} eats food (unknown diet)"),
    }
}

fn co_located_prey<'a>(snapshot: &'a ZooSnapshot, animal: &Animal) -> Option<&'a Animal> {
    let enclosure = snapshot.placed_enclosure(animal)?;
    snapshot
        .prey_of(animal)
        .filter(|prey| prey.enclosure_id == Some(enclosure.id))
}

/// Sunrise or sunset lines for every animal in `scope`.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the scoped animal or enclosure does not exist.
pub fn day_phase_report(
    snapshot: &ZooSnapshot,
    scope: Scope,
    phase: DayPhase,
) -> Result<Vec<ActionLine>, CoreError> {
    let animals = animals_in_scope(snapshot, scope)?;
    Ok(animals
        .into_iter()
        .map(|animal| action_line(snapshot, animal, describe_phase(animal, phase)))
        .collect())
}

/// Feeding lines for every animal in `scope`, grouped by enclosure.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the scoped animal or enclosure does not exist.
pub fn feeding_report(snapshot: &ZooSnapshot, scope: Scope) -> Result<Vec<ActionLine>, CoreError> {
    let animals = animals_in_scope(snapshot, scope)?;
    Ok(animals
        .into_iter()
        .map(|animal| action_line(snapshot, animal, describe_feeding(snapshot, animal)))
        .collect())
}

/// Animals covered by `scope`, ordered by enclosure name (unassigned last),
/// then animal name, then id.
fn animals_in_scope(snapshot: &ZooSnapshot, scope: Scope) -> Result<Vec<&Animal>, CoreError> {
    let mut animals = match scope {
        Scope::Animal(id) => vec![snapshot.require_animal(id)?],
        Scope::Enclosure(id) => {
            snapshot.require_enclosure(id)?;
            snapshot.occupants(id)
        }
        Scope::Zoo => snapshot.animals.iter().collect(),
    };

    animals.sort_by(|a, b| {
        let a_enclosure = snapshot.placed_enclosure(a).map(|e| e.name.as_str());
        let b_enclosure = snapshot.placed_enclosure(b).map(|e| e.name.as_str());
        a_enclosure
            .is_none()
            .cmp(&b_enclosure.is_none())
            .then_with(|| a_enclosure.cmp(&b_enclosure))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(animals)
}

fn action_line(snapshot: &ZooSnapshot, animal: &Animal, message: String) -> ActionLine {
    ActionLine {
        animal_id: animal.id,
        animal: animal.name.clone(),
        species: animal.species.clone(),
        enclosure: snapshot.placed_enclosure(animal).map(|e| e.name.clone()),
        message,
    }
}
