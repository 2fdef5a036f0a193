//! Report and response types returned by the engine and printed by `zoo`.
//!
//! Every type here is meant to be displayed as-is by a presentation layer:
//! lines are already human-readable and ordered.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssignMode;
use crate::ids::AnimalId;

/// Outcome of a constraint check.
///
/// `ok` is true exactly when `failed` is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConstraintReport {
    pub ok: bool,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl ConstraintReport {
    /// An empty report, which is vacuously ok.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ok: true,
            passed: Vec::new(),
            failed: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_lines(passed: Vec<String>, failed: Vec<String>) -> Self {
        Self {
            ok: failed.is_empty(),
            passed,
            failed,
        }
    }

    pub fn pass(&mut self, line: impl Into<String>) {
        self.passed.push(line.into());
    }

    pub fn fail(&mut self, line: impl Into<String>) {
        self.failed.push(line.into());
        self.ok = false;
    }

    /// Record `line` as passed or failed depending on `ok`.
    pub fn record(&mut self, ok: bool, line: impl Into<String>) {
        if ok {
            self.pass(line);
        } else {
            self.fail(line);
        }
    }
}

/// Summary of one auto-assignment run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub mode: AssignMode,
    pub assigned_count: u32,
    pub created_count: u32,
    /// Ordered, human-readable record of every placement and creation.
    pub log: Vec<String>,
}

/// One line of a sunrise, sunset, or feeding report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionLine {
    pub animal_id: AnimalId,
    pub animal: String,
    pub species: String,
    /// Enclosure name, or `None` for an unassigned animal.
    pub enclosure: Option<String>,
    pub message: String,
}

/// Dashboard counts from `zoo status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ZooStatus {
    pub animals: u32,
    pub categories: u32,
    pub enclosures: u32,
    pub unassigned_animals: u32,
}
