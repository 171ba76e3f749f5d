use anyhow::{Context, Result};
use clap::Parser;

use trivia::cli::handlers::{self, CommandContext};
use trivia::cli::{Cli, Commands};
use trivia::config::TriviaConfig;
use trivia::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Form);

    // The form owns the terminal; its logs go to a file instead of stderr.
    let (target, log_file) = match command {
        Commands::Form => (
            LogTarget::FileOnly,
            cli.log_file.clone().or_else(logging::default_log_file),
        ),
        _ => (LogTarget::Stderr, cli.log_file.clone()),
    };
    logging::init(cli.verbose, log_file, target);

    let config_path = cli.config;
    let api_url = cli.api_url;
    let context = || load_context(config_path.clone(), api_url.clone());

    match command {
        Commands::Init => handlers::handle_init(api_url.clone()),
        Commands::Form => handlers::handle_form(context()?),
        Commands::Categories { json } => handlers::handle_categories(&context()?, json),
        Commands::Add {
            question,
            answer,
            difficulty,
            category,
            json,
        } => handlers::handle_add(&context()?, question, answer, difficulty, category, json),
        Commands::Questions { page, json } => handlers::handle_questions(&context()?, page, json),
        Commands::Search { term, json } => handlers::handle_search(&context()?, term, json),
        Commands::ByCategory { id, json } => handlers::handle_by_category(&context()?, id, json),
        Commands::Delete { id, force } => handlers::handle_delete(&context()?, id, force),
        Commands::Quiz {
            category,
            previous,
            json,
        } => handlers::handle_quiz(&context()?, category, previous, json),
    }
}

fn load_context(
    config_path: Option<std::path::PathBuf>,
    api_url: Option<String>,
) -> Result<CommandContext> {
    let (mut config, found) = match config_path {
        Some(path) => {
            let config = TriviaConfig::load_from(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, Some(path))
        }
        None => {
            let cwd = std::env::current_dir()?;
            TriviaConfig::load(&cwd).context("Failed to load trivia configuration")?
        }
    };

    if let Some(url) = api_url {
        config.api.base_url = url;
    }

    match &found {
        Some(path) => tracing::debug!(config = %path.display(), base_url = %config.api.base_url, "loaded config"),
        None => tracing::debug!(base_url = %config.api.base_url, "no config file, using defaults"),
    }

    CommandContext::new(config)
}
