use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::routine::Routine;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status => commands::status::handle(ctx, flags).await,
        Commands::Animal { action } => commands::animal::handle(&action, ctx, flags).await,
        Commands::Enclosure { action } => commands::enclosure::handle(&action, ctx, flags).await,
        Commands::Category { action } => commands::category::handle(&action, ctx, flags).await,
        Commands::Assign(args) => commands::assign::handle(&args, ctx, flags).await,
        Commands::Check(args) => commands::check::handle(&args, ctx, flags).await,
        Commands::Sunrise(args) => commands::routine::handle(Routine::Sunrise, &args, ctx, flags).await,
        Commands::Sunset(args) => commands::routine::handle(Routine::Sunset, &args, ctx, flags).await,
        Commands::Feed(args) => commands::routine::handle(Routine::Feed, &args, ctx, flags).await,
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}
