//! Builders shared by unit tests.

use zoo_core::entities::{Animal, Enclosure};
use zoo_core::enums::{ActivityPattern, AnimalSize, Climate, DietaryClass, SecurityLevel};
use zoo_core::habitat::HabitatSet;
use zoo_core::ids::{AnimalId, EnclosureId};

pub fn animal(id: u32, name: &str, space: f64, security: SecurityLevel) -> Animal {
    Animal {
        id: AnimalId(id),
        name: name.into(),
        species: "Test".into(),
        size: AnimalSize::Medium,
        dietary_class: DietaryClass::Omnivore,
        activity_pattern: ActivityPattern::Diurnal,
        space_requirement: space,
        security_requirement: security,
        category_id: None,
        enclosure_id: None,
        prey_id: None,
    }
}

pub fn enclosure(id: u32, name: &str, size: f64, security: SecurityLevel) -> Enclosure {
    Enclosure {
        id: EnclosureId(id),
        name: name.into(),
        climate: Climate::Temperate,
        habitat: HabitatSet::new(),
        security_level: security,
        size,
    }
}
