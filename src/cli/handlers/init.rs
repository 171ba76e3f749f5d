use crate::config::{ApiSettings, CONFIG_FILE_NAME, TriviaConfig};
use crate::error::TriviaError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(api_url: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(TriviaError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut config = TriviaConfig::default();
    if let Some(url) = api_url {
        config.api = ApiSettings {
            base_url: url,
            ..ApiSettings::default()
        };
    }
    // Refuse to write a config the other commands could not use.
    config.api.base()?;

    config.save(&config_path)?;
    tracing::info!(path = %config_path.display(), "wrote config");

    println!("{} trivia config in {}", "Initialized".green(), cwd.display());
    println!("  Config:   {}", config_path.display());
    println!("  Base URL: {}", config.api.base_url);

    Ok(())
}
