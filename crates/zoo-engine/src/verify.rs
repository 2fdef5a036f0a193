//! Read-only constraint verification.
//!
//! Occupants are re-derived from the snapshot on every call and checked as a
//! whole set with the same rules the feasibility predicate uses. Nothing here
//! mutates the snapshot.

use zoo_core::entities::{Animal, Enclosure};
use zoo_core::enums::SecurityLevel;
use zoo_core::errors::CoreError;
use zoo_core::ids::{AnimalId, EnclosureId};
use zoo_core::responses::ConstraintReport;

use crate::feasibility::{fits, predation_conflicts, required_security, space_used};
use crate::scope::Scope;
use crate::snapshot::ZooSnapshot;
use crate::units::format_area;

/// Line reported for an animal without a usable enclosure.
pub const UNASSIGNED_LINE: &str =
    "No enclosure assigned (allowed, but constraints cannot be fully validated)";

/// Check constraints for one animal, one enclosure, or the whole zoo.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the scoped animal or enclosure does not exist.
pub fn check_constraints(
    snapshot: &ZooSnapshot,
    scope: Scope,
) -> Result<ConstraintReport, CoreError> {
    match scope {
        Scope::Animal(id) => check_animal(snapshot, id),
        Scope::Enclosure(id) => check_enclosure(snapshot, id),
        Scope::Zoo => Ok(check_all(snapshot)),
    }
}

/// Check space, security, and predation for one enclosure's full occupant set.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the enclosure does not exist.
pub fn check_enclosure(
    snapshot: &ZooSnapshot,
    id: EnclosureId,
) -> Result<ConstraintReport, CoreError> {
    let enclosure = snapshot.require_enclosure(id)?;
    Ok(enclosure_report(enclosure, &snapshot.occupants(id)))
}

/// Check the constraints that involve one animal.
///
/// An unassigned animal yields a single informational failure instead of
/// security, space, or predation lines.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the animal does not exist.
pub fn check_animal(snapshot: &ZooSnapshot, id: AnimalId) -> Result<ConstraintReport, CoreError> {
    let animal = snapshot.require_animal(id)?;
    let mut report = ConstraintReport::new();

    let Some(enclosure) = snapshot.placed_enclosure(animal) else {
        if let Some(missing) = animal.enclosure_id {
            report.fail(format!(
                "Enclosure {missing} not found; constraints cannot be validated"
            ));
        } else {
            report.fail(UNASSIGNED_LINE);
        }
        return Ok(report);
    };

    report.pass(format!("Enclosure: {}", enclosure.name));

    let occupants = snapshot.occupants(enclosure.id);
    report.record(
        enclosure
            .security_level
            .satisfies(animal.security_requirement),
        security_line(animal.security_requirement, enclosure),
    );
    push_space_line(&mut report, enclosure, &occupants);

    let conflicts = predation_conflicts(&occupants)
        .into_iter()
        .filter(|conflict| conflict.involves(animal.id))
        .collect::<Vec<_>>();
    if conflicts.is_empty() {
        report.pass("Predation: no conflicts -> OK");
    }
    for conflict in conflicts {
        report.fail(format!("Predation: {conflict} -> FAIL"));
    }

    Ok(report)
}

/// Check every enclosure, in name order. `ok` only if every enclosure is ok.
#[must_use]
pub fn check_all(snapshot: &ZooSnapshot) -> ConstraintReport {
    let mut report = ConstraintReport::new();
    for enclosure in snapshot.enclosures_by_name() {
        let sub = enclosure_report(enclosure, &snapshot.occupants(enclosure.id));
        if sub.ok {
            report.pass(format!("{}: OK", enclosure.name));
        } else {
            report.fail(format!(
                "{}: FAIL ({})",
                enclosure.name,
                sub.failed.join(" | ")
            ));
        }
    }
    tracing::debug!(
        enclosures = snapshot.enclosures.len(),
        ok = report.ok,
        "checked zoo constraints"
    );
    report
}

fn enclosure_report(enclosure: &Enclosure, occupants: &[&Animal]) -> ConstraintReport {
    let mut report = ConstraintReport::new();

    push_space_line(&mut report, enclosure, occupants);

    let required = required_security(occupants.iter().copied());
    report.record(
        enclosure.security_level.satisfies(required),
        security_line(required, enclosure),
    );

    let conflicts = predation_conflicts(occupants);
    if conflicts.is_empty() {
        report.pass("Predation: no conflicts -> OK");
    }
    for conflict in conflicts {
        report.fail(format!("Predation: {conflict} -> FAIL"));
    }

    report
}

fn push_space_line(report: &mut ConstraintReport, enclosure: &Enclosure, occupants: &[&Animal]) {
    let used = space_used(occupants.iter().copied());
    let ok = fits(used, enclosure.size);
    report.record(
        ok,
        format!(
            "Space: {}/{} m² -> {}",
            format_area(used),
            format_area(enclosure.size),
            verdict(ok)
        ),
    );
}

fn security_line(required: SecurityLevel, enclosure: &Enclosure) -> String {
    format!(
        "Security: required {required} / enclosure {} -> {}",
        enclosure.security_level,
        verdict(enclosure.security_level.satisfies(required))
    )
}

const fn verdict(ok: bool) -> &'static str {
    if ok { "OK" } else { "FAIL" }
}
