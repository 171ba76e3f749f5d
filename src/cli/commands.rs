use crate::model::Difficulty;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trivia")]
#[command(
    author,
    version,
    about = "Add trivia questions to a question bank from the terminal"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run (opens the form when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (searches upward for .trivia.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the question bank (overrides config)
    #[arg(long, global = true, env = "TRIVIA_API_URL")]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .trivia.yml in the current directory
    Init,

    /// Open the add-question form
    #[command(visible_alias = "tui")]
    Form,

    /// List categories
    #[command(visible_alias = "cats")]
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a question without opening the form
    #[command(visible_alias = "new")]
    Add {
        /// Question text
        #[arg(short, long)]
        question: String,

        /// Answer text
        #[arg(short, long)]
        answer: String,

        /// Difficulty from 1 to 5
        #[arg(short, long, default_value = "1")]
        difficulty: Difficulty,

        /// Category id
        #[arg(short, long, default_value_t = 1)]
        category: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List questions, ten per page
    #[command(visible_alias = "ls")]
    Questions {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find questions containing a term
    Search {
        /// Text to look for
        term: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List questions in one category
    ByCategory {
        /// Category id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a question
    #[command(visible_alias = "rm")]
    Delete {
        /// Question id
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Draw a quiz question
    Quiz {
        /// Category id (all categories when omitted)
        #[arg(short, long)]
        category: Option<u64>,

        /// Ids of questions already asked
        #[arg(short, long, value_delimiter = ',')]
        previous: Vec<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
