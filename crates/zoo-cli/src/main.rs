use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;
mod write_lock;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("zoo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args);
    }

    let is_init = matches!(cli.command, cli::Commands::Init(_));
    let project_root = resolve_project_root(cli.project.as_deref(), is_init)?;
    let config = bootstrap::load_config(&project_root)?;

    let flags = cli.global_flags(config.general.default_format.into());
    ui::init(&flags);

    if let cli::Commands::Init(args) = &cli.command {
        return commands::init::handle(args, &project_root, &config, &flags).await;
    }

    let command = cli.command;
    let write_lock = match snapshot_writer(&command) {
        Some(label) => Some(write_lock::acquire(&project_root, label).await?),
        None => None,
    };

    let ctx = context::AppContext::open(project_root, config)
        .context("failed to open zoo project")?;

    let result = commands::dispatch::dispatch(command, &ctx, &flags).await;
    drop(write_lock);
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ZOO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>, is_init: bool) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == zoo_config::PROJECT_DIR)
        {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.zoo' directory has no parent");
        }

        if explicit.is_dir() || is_init {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    if is_init {
        return Ok(start);
    }
    context::locate_zoo(&start)
}

/// The label recorded in the snapshot lock, or `None` for read-only commands.
fn snapshot_writer(command: &cli::Commands) -> Option<&'static str> {
    use crate::cli::subcommands::AnimalCommands;

    match command {
        cli::Commands::Animal {
            action: AnimalCommands::Move { .. },
        } => Some("animal move"),
        cli::Commands::Assign(args) if !args.dry_run => Some("assign"),
        cli::Commands::Import(_) => Some("import"),
        cli::Commands::Animal { .. }
        | cli::Commands::Assign(_)
        | cli::Commands::Status
        | cli::Commands::Enclosure { .. }
        | cli::Commands::Category { .. }
        | cli::Commands::Check(_)
        | cli::Commands::Sunrise(_)
        | cli::Commands::Sunset(_)
        | cli::Commands::Feed(_)
        | cli::Commands::Init(_)
        | cli::Commands::Schema(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use pretty_assertions::assert_eq;

    use super::{resolve_project_root, snapshot_writer};
    use crate::cli::Cli;

    fn writer(args: &[&str]) -> Option<&'static str> {
        let cli = Cli::try_parse_from(args).expect("cli should parse");
        snapshot_writer(&cli.command)
    }

    #[test]
    fn only_snapshot_writers_take_the_lock() {
        assert_eq!(writer(&["zoo", "assign"]), Some("assign"));
        assert_eq!(
            writer(&["zoo", "animal", "move", "1", "--unassign"]),
            Some("animal move")
        );
        assert_eq!(writer(&["zoo", "import", "seed.json"]), Some("import"));
        assert_eq!(writer(&["zoo", "assign", "--dry-run"]), None);
        assert_eq!(writer(&["zoo", "check"]), None);
        assert_eq!(writer(&["zoo", "animal", "list"]), None);
        assert_eq!(writer(&["zoo", "feed", "--enclosure", "2"]), None);
    }

    #[test]
    fn explicit_project_dir_can_point_at_dot_zoo() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let dot_zoo = temp.path().join(".zoo");
        std::fs::create_dir(&dot_zoo).expect(".zoo should create");

        let root = resolve_project_root(dot_zoo.to_str(), false).expect("root resolves");
        assert_eq!(root, temp.path());
    }

    #[test]
    fn missing_explicit_project_is_rejected_unless_initializing() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let missing = temp.path().join("nowhere");
        let missing = missing.to_str().expect("utf-8 path");

        assert!(resolve_project_root(Some(missing), false).is_err());
        assert!(resolve_project_root(Some(missing), true).is_ok());
    }
}
