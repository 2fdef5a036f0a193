use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityPattern, AnimalSize, DietaryClass, SecurityLevel};
use crate::ids::{AnimalId, CategoryId, EnclosureId};

/// An animal in the catalogue.
///
/// `enclosure_id` is only changed by auto-assignment or an explicit move.
/// `prey_id` names at most one designated prey; chains and cycles are allowed
/// because predation only ever looks at co-location.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub species: String,
    pub size: AnimalSize,
    pub dietary_class: DietaryClass,
    pub activity_pattern: ActivityPattern,
    /// Area needed by this animal, in square meters.
    pub space_requirement: f64,
    pub security_requirement: SecurityLevel,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub enclosure_id: Option<EnclosureId>,
    #[serde(default)]
    pub prey_id: Option<AnimalId>,
}

impl Animal {
    /// The designated prey, ignoring a self-reference.
    #[must_use]
    pub fn designated_prey(&self) -> Option<AnimalId> {
        self.prey_id.filter(|prey| *prey != self.id)
    }

    /// Whether this animal names `other` as its prey.
    #[must_use]
    pub fn preys_on(&self, other: AnimalId) -> bool {
        self.designated_prey() == Some(other)
    }
}
