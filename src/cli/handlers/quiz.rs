use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::print_question;

pub fn handle_quiz(
    ctx: &CommandContext,
    category: Option<u64>,
    previous: Vec<u64>,
    json: bool,
) -> Result<()> {
    let question = ctx
        .bank
        .next_quiz_question(category, &previous)
        .context("Unable to draw a quiz question")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&question)?);
        return Ok(());
    }

    match question {
        Some(q) => print_question(&q, None),
        None => println!("{}", "No questions left for this quiz.".yellow()),
    }
    Ok(())
}
