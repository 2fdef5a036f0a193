//! In-memory arena of animals, enclosures, and categories.
//!
//! A snapshot is loaded once per operation. Occupancy is always derived from
//! the animals' `enclosure_id` fields; no cached occupant list exists anywhere.
//! Dangling references (to enclosures or prey missing from the snapshot) are
//! tolerated and resolve to `None`.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use zoo_core::entities::{Animal, Category, Enclosure};
use zoo_core::enums::AssignMode;
use zoo_core::errors::CoreError;
use zoo_core::ids::{AnimalId, CategoryId, EnclosureId};
use zoo_core::responses::ZooStatus;

use crate::plan::{AssignmentPlan, Reassignment};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ZooSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub enclosures: Vec<Enclosure>,
    #[serde(default)]
    pub animals: Vec<Animal>,
}

impl ZooSnapshot {
    #[must_use]
    pub const fn new(
        animals: Vec<Animal>,
        enclosures: Vec<Enclosure>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            categories,
            enclosures,
            animals,
        }
    }

    #[must_use]
    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.id == id)
    }

    #[must_use]
    pub fn enclosure(&self, id: EnclosureId) -> Option<&Enclosure> {
        self.enclosures.iter().find(|enclosure| enclosure.id == id)
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Look up an animal or fail with [`CoreError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no animal has this id.
    pub fn require_animal(&self, id: AnimalId) -> Result<&Animal, CoreError> {
        self.animal(id)
            .ok_or_else(|| CoreError::not_found("animal", id))
    }

    /// Look up an enclosure or fail with [`CoreError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no enclosure has this id.
    pub fn require_enclosure(&self, id: EnclosureId) -> Result<&Enclosure, CoreError> {
        self.enclosure(id)
            .ok_or_else(|| CoreError::not_found("enclosure", id))
    }

    /// Animals currently placed in `id`, in snapshot order.
    #[must_use]
    pub fn occupants(&self, id: EnclosureId) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|animal| animal.enclosure_id == Some(id))
            .collect()
    }

    /// The enclosure an animal is placed in, if that enclosure exists.
    #[must_use]
    pub fn placed_enclosure(&self, animal: &Animal) -> Option<&Enclosure> {
        animal.enclosure_id.and_then(|id| self.enclosure(id))
    }

    /// Whether the animal has no usable placement (none, or a dangling one).
    #[must_use]
    pub fn is_unassigned(&self, animal: &Animal) -> bool {
        self.placed_enclosure(animal).is_none()
    }

    /// The animal's designated prey, if it names another animal in the snapshot.
    #[must_use]
    pub fn prey_of(&self, animal: &Animal) -> Option<&Animal> {
        animal.designated_prey().and_then(|id| self.animal(id))
    }

    /// Enclosures in stable scan order: by name, then by id.
    #[must_use]
    pub fn enclosures_by_name(&self) -> Vec<&Enclosure> {
        let mut enclosures = self.enclosures.iter().collect::<Vec<_>>();
        enclosures.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        enclosures
    }

    /// A fresh enclosure id, one past the highest id in the snapshot.
    #[must_use]
    pub fn next_enclosure_id(&self) -> EnclosureId {
        let max = self
            .enclosures
            .iter()
            .map(|enclosure| enclosure.id.get())
            .max()
            .unwrap_or(0);
        EnclosureId(max.saturating_add(1))
    }

    /// Dashboard counts.
    #[must_use]
    pub fn status(&self) -> ZooStatus {
        let unassigned = self
            .animals
            .iter()
            .filter(|animal| self.is_unassigned(animal))
            .count();
        ZooStatus {
            animals: count(self.animals.len()),
            categories: count(self.categories.len()),
            enclosures: count(self.enclosures.len()),
            unassigned_animals: count(unassigned),
        }
    }

    /// Reject snapshots with duplicate ids or areas that are not positive
    /// finite numbers. Dangling references are allowed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending record.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for animal in &self.animals {
            if !seen.insert(animal.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate animal id {}",
                    animal.id
                )));
            }
            if !is_positive_area(animal.space_requirement) {
                return Err(CoreError::Validation(format!(
                    "animal {} has invalid space requirement {}",
                    animal.id, animal.space_requirement
                )));
            }
        }

        let mut seen = HashSet::new();
        for enclosure in &self.enclosures {
            if !seen.insert(enclosure.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate enclosure id {}",
                    enclosure.id
                )));
            }
            if !is_positive_area(enclosure.size) {
                return Err(CoreError::Validation(format!(
                    "enclosure {} has invalid size {}",
                    enclosure.id, enclosure.size
                )));
            }
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        Ok(())
    }

    /// Apply an assignment plan in place.
    pub fn apply_plan(&mut self, plan: &AssignmentPlan) {
        if plan.mode == AssignMode::Reset {
            for animal in &mut self.animals {
                animal.enclosure_id = None;
            }
        }

        if !plan.removed_enclosures.is_empty() {
            let removed = plan
                .removed_enclosures
                .iter()
                .copied()
                .collect::<HashSet<_>>();
            self.enclosures
                .retain(|enclosure| !removed.contains(&enclosure.id));
            for animal in &mut self.animals {
                if animal.enclosure_id.is_some_and(|id| removed.contains(&id)) {
                    animal.enclosure_id = None;
                }
            }
        }

        self.enclosures
            .extend(plan.created_enclosures.iter().cloned());

        for reassignment in &plan.reassignments {
            self.apply_reassignment(reassignment);
        }
    }

    /// Apply one reassignment. Returns `false` if the animal is not in the snapshot.
    pub fn apply_reassignment(&mut self, reassignment: &Reassignment) -> bool {
        match self
            .animals
            .iter_mut()
            .find(|animal| animal.id == reassignment.animal_id)
        {
            Some(animal) => {
                animal.enclosure_id = reassignment.enclosure_id;
                true
            }
            None => false,
        }
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn is_positive_area(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use zoo_core::enums::{ActivityPattern, AnimalSize, Climate, DietaryClass, SecurityLevel};
    use zoo_core::habitat::HabitatSet;

    use super::*;

    fn animal(id: u32, enclosure: Option<u32>, prey: Option<u32>) -> Animal {
        Animal {
            id: AnimalId(id),
            name: format!("animal-{id}"),
            species: "Test".into(),
            size: AnimalSize::Medium,
            dietary_class: DietaryClass::Omnivore,
            activity_pattern: ActivityPattern::Diurnal,
            space_requirement: 10.0,
            security_requirement: SecurityLevel::Low,
            category_id: None,
            enclosure_id: enclosure.map(EnclosureId),
            prey_id: prey.map(AnimalId),
        }
    }

    fn enclosure(id: u32, name: &str) -> Enclosure {
        Enclosure {
            id: EnclosureId(id),
            name: name.into(),
            climate: Climate::Temperate,
            habitat: HabitatSet::new(),
            security_level: SecurityLevel::Low,
            size: 100.0,
        }
    }

    #[test]
    fn occupants_are_derived_from_animal_references() {
        let snapshot = ZooSnapshot::new(
            vec![animal(1, Some(1), None), animal(2, Some(2), None), animal(3, Some(1), None)],
            vec![enclosure(1, "A"), enclosure(2, "B")],
            Vec::new(),
        );
        let ids = snapshot
            .occupants(EnclosureId(1))
            .iter()
            .map(|a| a.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![AnimalId(1), AnimalId(3)]);
    }

    #[test]
    fn dangling_references_resolve_to_none() {
        let snapshot = ZooSnapshot::new(
            vec![animal(1, Some(99), Some(42)), animal(2, None, Some(2))],
            vec![enclosure(1, "A")],
            Vec::new(),
        );
        let first = snapshot.animal(AnimalId(1)).unwrap();
        let second = snapshot.animal(AnimalId(2)).unwrap();
        assert!(snapshot.placed_enclosure(first).is_none());
        assert!(snapshot.is_unassigned(first));
        assert!(snapshot.prey_of(first).is_none());
        assert!(snapshot.prey_of(second).is_none());
    }

    #[test]
    fn enclosures_scan_in_name_order() {
        let snapshot = ZooSnapshot::new(
            Vec::new(),
            vec![enclosure(3, "Zebra Plains"), enclosure(1, "Aviary"), enclosure(2, "Monkey House")],
            Vec::new(),
        );
        let names = snapshot
            .enclosures_by_name()
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Aviary", "Monkey House", "Zebra Plains"]);
        assert_eq!(snapshot.next_enclosure_id(), EnclosureId(4));
    }

    #[test]
    fn missing_ids_are_not_found() {
        let snapshot = ZooSnapshot::default();
        assert_eq!(
            snapshot.require_animal(AnimalId(7)).unwrap_err(),
            CoreError::not_found("animal", 7)
        );
        assert!(snapshot.require_enclosure(EnclosureId(7)).is_err());
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let snapshot = ZooSnapshot::new(
            vec![animal(1, None, None), animal(1, None, None)],
            Vec::new(),
            Vec::new(),
        );
        assert!(matches!(snapshot.validate(), Err(CoreError::Validation(_))));
    }

    #[rstest]
    #[case(-5.0)]
    #[case(0.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn non_positive_space_fails_validation(#[case] space: f64) {
        let mut bad = animal(1, None, None);
        bad.space_requirement = space;
        let snapshot = ZooSnapshot::new(vec![bad], Vec::new(), Vec::new());
        assert!(matches!(
            snapshot.validate(),
            Err(CoreError::Validation(reason)) if reason.contains("animal 1 has invalid space")
        ));
    }

    #[rstest]
    #[case(-10.0)]
    #[case(0.0)]
    #[case(f64::NEG_INFINITY)]
    fn non_positive_size_fails_validation(#[case] size: f64) {
        let mut bad = enclosure(1, "A");
        bad.size = size;
        let snapshot = ZooSnapshot::new(Vec::new(), vec![bad], Vec::new());
        assert!(matches!(
            snapshot.validate(),
            Err(CoreError::Validation(reason)) if reason.contains("enclosure 1 has invalid size")
        ));
    }

    #[test]
    fn negative_areas_in_json_are_rejected() {
        let snapshot: ZooSnapshot = serde_json::from_str(
            r#"{
                "enclosures": [{ "id": 1, "name": "Pit", "climate": "temperate",
                                 "habitat": [], "security_level": "low", "size": -10.0 }],
                "animals": [{ "id": 1, "name": "Rex", "species": "Dog", "size": "medium",
                              "dietary_class": "carnivore", "activity_pattern": "diurnal",
                              "space_requirement": -5.0, "security_requirement": "low",
                              "enclosure_id": 1 }]
            }"#,
        )
        .unwrap();
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn status_counts_dangling_placements_as_unassigned() {
        let snapshot = ZooSnapshot::new(
            vec![animal(1, Some(1), None), animal(2, Some(9), None), animal(3, None, None)],
            vec![enclosure(1, "A")],
            vec![Category {
                id: CategoryId(1),
                name: "Mammals".into(),
            }],
        );
        let status = snapshot.status();
        assert_eq!(status.animals, 3);
        assert_eq!(status.enclosures, 1);
        assert_eq!(status.categories, 1);
        assert_eq!(status.unassigned_animals, 2);
    }

    #[test]
    fn reset_plan_clears_placements_and_enclosures() {
        let mut snapshot = ZooSnapshot::new(
            vec![animal(1, Some(1), None), animal(2, None, None)],
            vec![enclosure(1, "A")],
            Vec::new(),
        );
        let mut plan = AssignmentPlan::new(AssignMode::Reset);
        plan.removed_enclosures.push(EnclosureId(1));
        plan.created_enclosures.push(enclosure(2, "Auto Enclosure 1"));
        plan.reassignments.push(Reassignment {
            animal_id: AnimalId(2),
            enclosure_id: Some(EnclosureId(2)),
        });

        snapshot.apply_plan(&plan);

        assert_eq!(snapshot.enclosures.len(), 1);
        assert_eq!(snapshot.enclosures[0].id, EnclosureId(2));
        assert_eq!(snapshot.animal(AnimalId(1)).unwrap().enclosure_id, None);
        assert_eq!(
            snapshot.animal(AnimalId(2)).unwrap().enclosure_id,
            Some(EnclosureId(2))
        );
    }

    #[test]
    fn reassignment_of_unknown_animal_is_reported() {
        let mut snapshot = ZooSnapshot::default();
        assert!(!snapshot.apply_reassignment(&Reassignment {
            animal_id: AnimalId(1),
            enclosure_id: None,
        }));
    }
}
