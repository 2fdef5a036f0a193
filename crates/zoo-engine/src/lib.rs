//! # zoo-engine
//!
//! Enclosure assignment and constraint verification for the zoo manager.
//!
//! The engine works on one in-memory [`ZooSnapshot`] and never touches
//! storage. Every operation is synchronous and deterministic:
//!
//! - [`feasibility`]: the admit/reject predicate for one animal and one
//!   enclosure, plus the shared rules (space, security, predation) that
//!   verification re-applies to whole occupant sets.
//! - [`assign`]: greedy auto-assignment in `finish` or `reset` mode. Returns an
//!   [`AssignmentPlan`] for the persistence layer to commit.
//! - [`verify`]: read-only constraint reports per animal, per enclosure, or
//!   for the whole zoo.
//! - [`behavior`]: sunrise, sunset, and feeding text.
//! - [`plan`]: the outbound mutation set, including manual moves via
//!   [`plan::reassign`].
//!
//! ```
//! use zoo_core::enums::AssignMode;
//! use zoo_engine::{assign, verify, AutoEnclosurePolicy, Scope, ZooSnapshot};
//!
//! let mut snapshot = ZooSnapshot::default();
//! let outcome = assign::auto_assign(&snapshot, AssignMode::Finish, &AutoEnclosurePolicy::default());
//! snapshot.apply_plan(&outcome.plan);
//!
//! let report = verify::check_constraints(&snapshot, Scope::Zoo).unwrap();
//! assert!(report.ok);
//! ```

pub mod assign;
pub mod behavior;
pub mod feasibility;
pub mod plan;
pub mod scope;
pub mod snapshot;
pub mod units;
pub mod verify;

pub use assign::{AssignmentOutcome, AutoEnclosurePolicy};
pub use behavior::DayPhase;
pub use plan::{AssignmentPlan, Reassignment};
pub use scope::Scope;
pub use snapshot::ZooSnapshot;

#[cfg(test)]
mod test_support;
