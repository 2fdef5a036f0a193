//! Report scope shared by constraint checks and behavior reports.

use std::fmt;

use zoo_core::ids::{AnimalId, EnclosureId};

/// What a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Animal(AnimalId),
    Enclosure(EnclosureId),
    Zoo,
}

impl Scope {
    /// Build a scope from optional CLI selectors. Animal wins over enclosure.
    #[must_use]
    pub const fn from_selectors(animal: Option<AnimalId>, enclosure: Option<EnclosureId>) -> Self {
        match (animal, enclosure) {
            (Some(id), _) => Self::Animal(id),
            (None, Some(id)) => Self::Enclosure(id),
            (None, None) => Self::Zoo,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Animal(id) => write!(f, "animal {id}"),
            Self::Enclosure(id) => write!(f, "enclosure {id}"),
            Self::Zoo => f.write_str("zoo"),
        }
    }
}
