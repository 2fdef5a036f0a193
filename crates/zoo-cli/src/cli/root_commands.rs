use clap::{Args, Subcommand, ValueEnum};
use zoo_core::enums::AssignMode;
use zoo_core::ids::{AnimalId, EnclosureId};
use zoo_engine::Scope;

use crate::cli::subcommands::{AnimalCommands, CategoryCommands, EnclosureCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create `.zoo/` with an empty zoo and a default config.
    Init(InitArgs),
    /// Dashboard counts.
    Status,
    /// Animals.
    Animal {
        #[command(subcommand)]
        action: AnimalCommands,
    },
    /// Enclosures.
    Enclosure {
        #[command(subcommand)]
        action: EnclosureCommands,
    },
    /// Categories.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Place unassigned animals, creating enclosures where needed.
    Assign(AssignArgs),
    /// Check space, security, and predation constraints.
    Check(ScopeArgs),
    /// What each animal does at sunrise.
    Sunrise(ScopeArgs),
    /// What each animal does at sunset.
    Sunset(ScopeArgs),
    /// What each animal eats.
    Feed(ScopeArgs),
    /// Replace the zoo with the contents of a snapshot file.
    Import(ImportArgs),
    /// Print a JSON schema.
    Schema(SchemaArgs),
}

/// Arguments for `zoo init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Seed the new zoo from a snapshot file.
    #[arg(long)]
    pub from: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AssignModeArg {
    /// Keep existing placements; place only unassigned animals.
    Finish,
    /// Remove every enclosure and placement, then re-plan from scratch.
    Reset,
}

impl From<AssignModeArg> for AssignMode {
    fn from(arg: AssignModeArg) -> Self {
        match arg {
            AssignModeArg::Finish => Self::Finish,
            AssignModeArg::Reset => Self::Reset,
        }
    }
}

/// Arguments for `zoo assign`.
#[derive(Clone, Debug, Args)]
pub struct AssignArgs {
    #[arg(long, value_enum, default_value = "finish")]
    pub mode: AssignModeArg,
    /// Print the plan without committing it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Restrict a report to one animal or one enclosure. Neither means the whole zoo.
#[derive(Clone, Debug, Args)]
pub struct ScopeArgs {
    #[arg(long, conflicts_with = "enclosure")]
    pub animal: Option<AnimalId>,
    #[arg(long)]
    pub enclosure: Option<EnclosureId>,
}

impl ScopeArgs {
    #[must_use]
    pub const fn scope(&self) -> Scope {
        Scope::from_selectors(self.animal, self.enclosure)
    }
}

/// Arguments for `zoo import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path to a snapshot JSON file (see `zoo schema snapshot`).
    pub path: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    /// The `.zoo/zoo.json` snapshot file.
    Snapshot,
    /// One line of `.zoo/trail.jsonl`.
    Trail,
    /// The plan printed by `zoo assign --dry-run --format json`.
    Plan,
}

/// Arguments for `zoo schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "snapshot")]
    pub target: SchemaTarget,
}
