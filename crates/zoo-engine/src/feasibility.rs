//! Feasibility predicate and the placement rules it is built from.
//!
//! There are exactly three rules, applied in this order:
//!
//! | Rule      | Holds when |
//! |-----------|------------|
//! | Security  | enclosure level ≥ every occupant's requirement |
//! | Capacity  | sum of occupants' space ≤ enclosure size |
//! | Predation | no occupant's designated prey is a co-occupant |
//!
//! [`assess`] applies them to one candidate animal against an occupant
//! snapshot (predation split into "eats an occupant" and "eaten by an
//! occupant"). [`crate::verify`] applies the same rule functions to a whole
//! occupant set. Because both go through [`space_used`], [`fits`],
//! [`required_security`], and [`predation_conflicts`], a placement produced by
//! assignment always verifies, and a placement that verifies is one
//! assignment could have produced.
//!
//! ```
//! use zoo_core::entities::{Animal, Enclosure};
//! use zoo_core::enums::*;
//! use zoo_core::habitat::HabitatSet;
//! use zoo_core::ids::*;
//! use zoo_engine::feasibility::can_place;
//!
//! let lion = Animal {
//!     id: AnimalId(1),
//!     name: "Leo".into(),
//!     species: "Lion".into(),
//!     size: AnimalSize::Large,
//!     dietary_class: DietaryClass::Carnivore,
//!     activity_pattern: ActivityPattern::Diurnal,
//!     space_requirement: 50.0,
//!     security_requirement: SecurityLevel::High,
//!     category_id: None,
//!     enclosure_id: None,
//!     prey_id: None,
//! };
//! let paddock = Enclosure {
//!     id: EnclosureId(1),
//!     name: "Paddock".into(),
//!     climate: Climate::Temperate,
//!     habitat: HabitatSet::new(),
//!     security_level: SecurityLevel::Low,
//!     size: 1000.0,
//! };
//! assert!(!can_place(&lion, &paddock, &[]));
//! ```

use std::fmt;

use zoo_core::entities::{Animal, Enclosure};
use zoo_core::enums::SecurityLevel;
use zoo_core::ids::AnimalId;

use crate::units::format_area;

/// Slack allowed when comparing summed areas against an enclosure size.
///
/// Incremental sums (assignment) and whole-set sums (verification) add the
/// same values in different orders, so exact `<=` could disagree at the edge.
pub const CAPACITY_TOLERANCE: f64 = 1e-9;

/// Total space required by `occupants`.
pub fn space_used<'a>(occupants: impl IntoIterator<Item = &'a Animal>) -> f64 {
    occupants
        .into_iter()
        .map(|animal| animal.space_requirement)
        .sum()
}

/// Whether `used` square meters fit in an enclosure of `size`.
#[must_use]
pub fn fits(used: f64, size: f64) -> bool {
    used <= size + CAPACITY_TOLERANCE
}

/// The highest security requirement among `occupants`, `Low` when empty.
pub fn required_security<'a>(occupants: impl IntoIterator<Item = &'a Animal>) -> SecurityLevel {
    occupants
        .into_iter()
        .map(|animal| animal.security_requirement)
        .max()
        .unwrap_or(SecurityLevel::Low)
}

/// A predator sharing an enclosure with its designated prey.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredationConflict<'a> {
    pub predator: &'a Animal,
    pub prey: &'a Animal,
}

impl PredationConflict<'_> {
    /// Whether `id` is the predator or the prey of this conflict.
    #[must_use]
    pub fn involves(&self, id: AnimalId) -> bool {
        self.predator.id == id || self.prey.id == id
    }
}

impl fmt::Display for PredationConflict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} may eat {}", self.predator.name, self.prey.name)
    }
}

/// Every predator/prey pair that shares the occupant set, in occupant order.
#[must_use]
pub fn predation_conflicts<'a>(occupants: &[&'a Animal]) -> Vec<PredationConflict<'a>> {
    occupants
        .iter()
        .filter_map(|&predator| {
            let prey_id = predator.designated_prey()?;
            occupants
                .iter()
                .find(|candidate| candidate.id == prey_id)
                .map(|&prey| PredationConflict { predator, prey })
        })
        .collect()
}

/// Why an enclosure rejected an animal.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The enclosure's security level is below the animal's requirement.
    Security {
        required: SecurityLevel,
        available: SecurityLevel,
    },
    /// Current occupants plus the animal exceed the enclosure size.
    Capacity { used: f64, requested: f64, size: f64 },
    /// The animal's designated prey already lives here.
    PreyPresent { prey: AnimalId, prey_name: String },
    /// An occupant names the animal as its prey.
    PredatorPresent {
        predator: AnimalId,
        predator_name: String,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Security {
                required,
                available,
            } => write!(f, "security {available} is below required {required}"),
            Self::Capacity {
                used,
                requested,
                size,
            } => write!(
                f,
                "needs {} m² but only {} of {} m² is free",
                format_area(*requested),
                format_area((size - used).max(0.0)),
                format_area(*size)
            ),
            Self::PreyPresent { prey_name, .. } => write!(f, "its prey {prey_name} lives here"),
            Self::PredatorPresent { predator_name, .. } => {
                write!(f, "{predator_name} would eat it")
            }
        }
    }
}

/// Result of the explanatory predicate: every failed check, in check order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feasibility {
    rejections: Vec<Rejection>,
}

impl Feasibility {
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.rejections.is_empty()
    }

    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    #[must_use]
    pub fn into_rejections(self) -> Vec<Rejection> {
        self.rejections
    }
}

/// Check whether `animal` may join `occupants` in `enclosure`, reporting every
/// failed check.
///
/// If `animal` itself appears in `occupants` it is ignored, so an animal that
/// is already placed can be re-assessed against its own enclosure.
#[must_use]
pub fn assess(animal: &Animal, enclosure: &Enclosure, occupants: &[&Animal]) -> Feasibility {
    let others = occupants
        .iter()
        .copied()
        .filter(|occupant| occupant.id != animal.id)
        .collect::<Vec<_>>();
    let mut rejections = Vec::new();

    if !enclosure
        .security_level
        .satisfies(animal.security_requirement)
    {
        rejections.push(Rejection::Security {
            required: animal.security_requirement,
            available: enclosure.security_level,
        });
    }

    let used = space_used(others.iter().copied());
    if !fits(used + animal.space_requirement, enclosure.size) {
        rejections.push(Rejection::Capacity {
            used,
            requested: animal.space_requirement,
            size: enclosure.size,
        });
    }

    if let Some(prey_id) = animal.designated_prey() {
        if let Some(prey) = others.iter().find(|occupant| occupant.id == prey_id) {
            rejections.push(Rejection::PreyPresent {
                prey: prey.id,
                prey_name: prey.name.clone(),
            });
        }
    }

    if let Some(predator) = others.iter().find(|occupant| occupant.preys_on(animal.id)) {
        rejections.push(Rejection::PredatorPresent {
            predator: predator.id,
            predator_name: predator.name.clone(),
        });
    }

    Feasibility { rejections }
}

/// Whether `animal` may join `occupants` in `enclosure`.
#[must_use]
pub fn can_place(animal: &Animal, enclosure: &Enclosure, occupants: &[&Animal]) -> bool {
    assess(animal, enclosure, occupants).is_feasible()
}
