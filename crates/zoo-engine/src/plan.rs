//! Outbound mutation requests.
//!
//! The engine never writes storage. It hands an [`AssignmentPlan`] (or a single
//! [`Reassignment`]) to the persistence layer, which commits it as one unit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use zoo_core::entities::Enclosure;
use zoo_core::enums::AssignMode;
use zoo_core::errors::CoreError;
use zoo_core::ids::{AnimalId, EnclosureId};

use crate::snapshot::ZooSnapshot;

/// Move one animal into an enclosure, or out of any enclosure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reassignment {
    pub animal_id: AnimalId,
    pub enclosure_id: Option<EnclosureId>,
}

/// Every change produced by one auto-assignment run.
///
/// Applied in this order: removals (reset mode clears every placement first),
/// creations, then reassignments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AssignmentPlan {
    pub mode: AssignMode,
    pub removed_enclosures: Vec<EnclosureId>,
    pub created_enclosures: Vec<Enclosure>,
    pub reassignments: Vec<Reassignment>,
}

impl AssignmentPlan {
    #[must_use]
    pub const fn new(mode: AssignMode) -> Self {
        Self {
            mode,
            removed_enclosures: Vec::new(),
            created_enclosures: Vec::new(),
            reassignments: Vec::new(),
        }
    }

    /// Whether committing this plan would change nothing.
    ///
    /// A reset plan is never empty: it clears placements even with no enclosures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mode == AssignMode::Finish
            && self.removed_enclosures.is_empty()
            && self.created_enclosures.is_empty()
            && self.reassignments.is_empty()
    }
}

/// Plan a manual move of one animal.
///
/// Both ids must exist. Feasibility is not enforced: a move may leave the
/// enclosure over capacity, and the verifier will report it.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the animal or target enclosure does not exist.
pub fn reassign(
    snapshot: &ZooSnapshot,
    animal_id: AnimalId,
    enclosure_id: Option<EnclosureId>,
) -> Result<Reassignment, CoreError> {
    let animal = snapshot.require_animal(animal_id)?;
    if let Some(id) = enclosure_id {
        let enclosure = snapshot.require_enclosure(id)?;
        tracing::debug!(animal = %animal.name, enclosure = %enclosure.name, "planned move");
    } else {
        tracing::debug!(animal = %animal.name, "planned unassignment");
    }
    Ok(Reassignment {
        animal_id,
        enclosure_id,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zoo_core::enums::SecurityLevel;

    use super::*;
    use crate::test_support::{animal, enclosure};

    fn crowded() -> ZooSnapshot {
        let mut big = animal(1, "Big", 80.0, SecurityLevel::Low);
        big.enclosure_id = Some(EnclosureId(1));
        ZooSnapshot::new(
            vec![big, animal(2, "Also Big", 80.0, SecurityLevel::High)],
            vec![enclosure(1, "Small", 100.0, SecurityLevel::Low)],
            Vec::new(),
        )
    }

    #[test]
    fn reassign_does_not_enforce_feasibility() {
        let snapshot = crowded();
        let move_in = reassign(&snapshot, AnimalId(2), Some(EnclosureId(1))).unwrap();
        assert_eq!(
            move_in,
            Reassignment {
                animal_id: AnimalId(2),
                enclosure_id: Some(EnclosureId(1)),
            }
        );
    }

    #[test]
    fn reassign_validates_both_ids() {
        let snapshot = crowded();
        assert_eq!(
            reassign(&snapshot, AnimalId(9), None).unwrap_err(),
            CoreError::not_found("animal", 9)
        );
        assert_eq!(
            reassign(&snapshot, AnimalId(1), Some(EnclosureId(9))).unwrap_err(),
            CoreError::not_found("enclosure", 9)
        );
        assert!(reassign(&snapshot, AnimalId(1), None).is_ok());
    }

    #[test]
    fn only_finish_plans_can_be_empty() {
        assert!(AssignmentPlan::new(AssignMode::Finish).is_empty());
        assert!(!AssignmentPlan::new(AssignMode::Reset).is_empty());
    }
}
