use anyhow::{Context, Result};

use super::CommandContext;
use super::utils::print_question_list;

pub fn handle_search(ctx: &CommandContext, term: String, json: bool) -> Result<()> {
    let list = ctx
        .bank
        .search(&term)
        .with_context(|| format!("Unable to search for '{}'", term))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        println!("Found {} results for '{}':\n", list.questions.len(), term);
        print_question_list(&list.questions, &list.categories);
    }
    Ok(())
}
