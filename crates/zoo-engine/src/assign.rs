//! Greedy auto-assignment of animals to enclosures.
//!
//! The heuristic is fixed and never backtracks:
//!
//! 1. `reset` drops every enclosure and placement; `finish` keeps them.
//! 2. Unassigned animals are ordered hardest-first: security requirement
//!    descending, then space requirement descending, then id.
//! 3. Each animal goes into the first enclosure, by name, that
//!    [`can_place`] admits against the occupants placed so far in this run.
//! 4. If none admits it, a new enclosure sized and secured for that animal is
//!    created and joins the pool, so later animals may share it.
//!
//! Step 4 makes the run total: every animal ends up placed.

use std::collections::{HashMap, HashSet};

use zoo_core::entities::{Animal, Enclosure};
use zoo_core::enums::{AssignMode, Climate, HabitatType, SecurityLevel};
use zoo_core::habitat::HabitatSet;
use zoo_core::ids::EnclosureId;
use zoo_core::responses::AssignmentSummary;

use crate::feasibility::can_place;
use crate::plan::{AssignmentPlan, Reassignment};
use crate::snapshot::ZooSnapshot;
use crate::units::format_area;

/// Default name prefix for generated enclosures.
pub const DEFAULT_NAME_PREFIX: &str = "Auto Enclosure";

/// Default smallest size for a generated enclosure, in square meters.
pub const DEFAULT_MIN_SIZE: f64 = 150.0;

/// Default factor applied to the founding animal's space requirement.
pub const DEFAULT_SIZE_MULTIPLIER: f64 = 10.0;

/// How new enclosures are shaped when no existing one fits.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoEnclosurePolicy {
    pub name_prefix: String,
    pub min_size: f64,
    pub size_multiplier: f64,
    pub climate: Climate,
    pub habitat: HabitatSet,
}

impl Default for AutoEnclosurePolicy {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            min_size: DEFAULT_MIN_SIZE,
            size_multiplier: DEFAULT_SIZE_MULTIPLIER,
            climate: Climate::Temperate,
            habitat: HabitatSet::single(HabitatType::Grassland),
        }
    }
}

impl AutoEnclosurePolicy {
    /// Size of an enclosure founded by `animal`.
    ///
    /// Never smaller than the animal's own requirement, whatever the policy.
    #[must_use]
    pub fn size_for(&self, animal: &Animal) -> f64 {
        (animal.space_requirement * self.size_multiplier)
            .max(self.min_size)
            .max(animal.space_requirement)
    }

    /// Security level of an enclosure founded by `animal`.
    #[must_use]
    pub fn security_for(animal: &Animal) -> SecurityLevel {
        animal.security_requirement.max(SecurityLevel::Low)
    }

    fn build(&self, id: EnclosureId, name: String, animal: &Animal) -> Enclosure {
        Enclosure {
            id,
            name,
            climate: self.climate,
            habitat: self.habitat.clone(),
            security_level: Self::security_for(animal),
            size: self.size_for(animal),
        }
    }
}

/// The plan to commit plus the summary to display.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOutcome {
    pub plan: AssignmentPlan,
    pub summary: AssignmentSummary,
}

/// Place every unassigned animal, creating enclosures where needed.
///
/// Pure: the snapshot is not modified. Apply [`AssignmentOutcome::plan`] to
/// commit the result.
#[must_use]
pub fn auto_assign(
    snapshot: &ZooSnapshot,
    mode: AssignMode,
    policy: &AutoEnclosurePolicy,
) -> AssignmentOutcome {
    let mut plan = AssignmentPlan::new(mode);
    let mut log = Vec::new();

    let mut pool: Vec<Enclosure> = Vec::new();
    let mut occupancy: HashMap<EnclosureId, Vec<&Animal>> = HashMap::new();
    let mut pending: Vec<&Animal> = Vec::new();

    match mode {
        AssignMode::Reset => {
            plan.removed_enclosures = snapshot.enclosures.iter().map(|e| e.id).collect();
            let cleared = snapshot
                .animals
                .iter()
                .filter(|animal| animal.enclosure_id.is_some())
                .count();
            log.push(format!(
                "Reset: removed {} enclosure(s) and cleared {cleared} placement(s)",
                plan.removed_enclosures.len()
            ));
            pending.extend(snapshot.animals.iter());
        }
        AssignMode::Finish => {
            pool.extend(snapshot.enclosures_by_name().into_iter().cloned());
            for animal in &snapshot.animals {
                match snapshot.placed_enclosure(animal) {
                    Some(enclosure) => occupancy.entry(enclosure.id).or_default().push(animal),
                    None => {
                        if let Some(missing) = animal.enclosure_id {
                            log.push(format!(
                                "{} references missing enclosure {missing}; treating as unassigned",
                                animal.name
                            ));
                        }
                        pending.push(animal);
                    }
                }
            }
        }
    }

    pending.sort_by(|a, b| {
        b.security_requirement
            .cmp(&a.security_requirement)
            .then_with(|| b.space_requirement.total_cmp(&a.space_requirement))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut taken_names = pool
        .iter()
        .map(|enclosure| enclosure.name.clone())
        .collect::<HashSet<_>>();
    let mut next_id = snapshot.next_enclosure_id();
    let mut assigned: u32 = 0;
    let mut created: u32 = 0;

    for animal in pending {
        let existing = pool
            .iter()
            .find(|enclosure| {
                let occupants = occupancy.get(&enclosure.id).map_or(&[][..], Vec::as_slice);
                can_place(animal, enclosure, occupants)
            })
            .map(|enclosure| (enclosure.id, enclosure.name.clone()));

        let (enclosure_id, enclosure_name) = if let Some(found) = existing {
            found
        } else {
            let name = unique_name(&policy.name_prefix, pool.len() + 1, &taken_names);
            let enclosure = policy.build(next_id, name, animal);
            next_id = EnclosureId(next_id.get().saturating_add(1));

            tracing::debug!(
                enclosure = %enclosure.name,
                security = %enclosure.security_level,
                size = enclosure.size,
                founder = %animal.name,
                "created enclosure"
            );
            log.push(format!(
                "Created {} ({} security, {} m², {}) for {}",
                enclosure.name,
                enclosure.security_level,
                format_area(enclosure.size),
                enclosure.climate,
                animal.name
            ));

            taken_names.insert(enclosure.name.clone());
            let found = (enclosure.id, enclosure.name.clone());
            let position = pool.partition_point(|e| {
                (e.name.as_str(), e.id) < (enclosure.name.as_str(), enclosure.id)
            });
            plan.created_enclosures.push(enclosure.clone());
            pool.insert(position, enclosure);
            created += 1;
            found
        };

        occupancy.entry(enclosure_id).or_default().push(animal);
        plan.reassignments.push(Reassignment {
            animal_id: animal.id,
            enclosure_id: Some(enclosure_id),
        });
        assigned += 1;

        tracing::debug!(animal = %animal.name, enclosure = %enclosure_name, "assigned animal");
        log.push(format!(
            "Assigned {} ({}) -> {enclosure_name}",
            animal.name, animal.species
        ));
    }

    log.push(format!(
        "Assigned {assigned} animal(s), created {created} enclosure(s)"
    ));
    tracing::info!(%mode, assigned, created, "auto-assignment planned");

    AssignmentOutcome {
        plan,
        summary: AssignmentSummary {
            mode,
            assigned_count: assigned,
            created_count: created,
            log,
        },
    }
}

/// `"{prefix} {n}"` for the first `n >= start` not already taken.
fn unique_name(prefix: &str, start: usize, taken: &HashSet<String>) -> String {
    let mut n = start;
    loop {
        let candidate = format!("{prefix} {n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
