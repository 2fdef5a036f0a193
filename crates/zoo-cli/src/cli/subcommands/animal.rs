use clap::Subcommand;
use zoo_core::ids::{AnimalId, EnclosureId};

/// Animal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnimalCommands {
    /// List animals.
    List {
        /// Only animals without a usable enclosure.
        #[arg(long, conflicts_with = "enclosure")]
        unassigned: bool,
        /// Only animals placed in this enclosure.
        #[arg(long)]
        enclosure: Option<EnclosureId>,
    },
    /// Move an animal by hand. Constraints are reported, not enforced.
    Move {
        id: AnimalId,
        /// Target enclosure id.
        #[arg(long, conflicts_with = "unassign", required_unless_present = "unassign")]
        to: Option<EnclosureId>,
        /// Take the animal out of its enclosure.
        #[arg(long)]
        unassign: bool,
    },
}
