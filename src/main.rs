use anyhow::{Context, Result};
use clap::Parser;

use relay_todo::cli::handlers::{self, CommandContext};
use relay_todo::cli::{Cli, Commands};
use relay_todo::config::TodoConfig;
use relay_todo::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init { backend, path } => handlers::handle_init(backend.into(), path),
        Commands::Schema => handlers::handle_schema(),
        Commands::Query { query, variables } => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_mutate(ctx, mutation, variables)
        }
        Commands::Serve { port } => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_serve(ctx, port)
        }
    }
}

fn load_context(config_path: &Option<std::path::PathBuf>) -> Result<CommandContext> {
    let (config, root) = match config_path {
        Some(path) => TodoConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TodoConfig::load(&std::env::current_dir()?)?,
    };
    tracing::debug!(root = %root.display(), backend = ?config.store.backend, "Loaded config");
    Ok(CommandContext::new(config, root))
}
