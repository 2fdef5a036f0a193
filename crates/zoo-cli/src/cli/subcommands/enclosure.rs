use clap::Subcommand;

/// Enclosure commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnclosureCommands {
    /// List enclosures with their current load.
    List,
}
