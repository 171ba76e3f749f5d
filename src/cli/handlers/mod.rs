mod add;
mod by_category;
mod categories;
mod delete;
mod form;
mod init;
mod questions;
mod quiz;
mod search;
mod utils;

pub use add::handle_add;
pub use by_category::handle_by_category;
pub use categories::handle_categories;
pub use delete::handle_delete;
pub use form::handle_form;
pub use init::handle_init;
pub use questions::handle_questions;
pub use quiz::handle_quiz;
pub use search::handle_search;

use crate::api::HttpQuestionBank;
use crate::config::TriviaConfig;
use anyhow::{Context, Result};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TriviaConfig,
    pub bank: HttpQuestionBank,
}

impl CommandContext {
    pub fn new(config: TriviaConfig) -> Result<Self> {
        let bank = HttpQuestionBank::new(&config.api)
            .with_context(|| format!("Invalid question bank URL '{}'", config.api.base_url))?;
        Ok(Self {
            config,
            bank,
        })
    }
}
