use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::print_question_list;

pub fn handle_questions(ctx: &CommandContext, page: u32, json: bool) -> Result<()> {
    let list = ctx
        .bank
        .questions(page)
        .with_context(|| format!("Unable to load page {} of questions", page))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    println!(
        "{} {} of {} questions\n",
        "Page".bold(),
        page.max(1),
        list.total_questions
    );
    print_question_list(&list.questions, &list.categories);
    Ok(())
}
