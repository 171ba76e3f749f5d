use crate::api::QuestionBank;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::print_question_list;

pub fn handle_by_category(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let list = ctx
        .bank
        .questions_in_category(&id)
        .with_context(|| format!("Unable to load questions for category {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    // The endpoint does not name the category; one extra read does.
    let categories = ctx.bank.categories().map(|c| c.into_map()).unwrap_or_default();
    let name = categories.get(&id).unwrap_or("unknown category");
    println!("{} {} ({})\n", "Category".bold(), name, id.cyan());
    print_question_list(&list.questions, &categories);
    Ok(())
}
