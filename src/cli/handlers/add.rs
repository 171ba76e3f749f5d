use crate::api::QuestionBank;
use crate::model::{Difficulty, FieldValue, NewQuestion};
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

pub fn handle_add(
    ctx: &CommandContext,
    question: String,
    answer: String,
    difficulty: Difficulty,
    category: u64,
    json: bool,
) -> Result<()> {
    let new_question = NewQuestion {
        question,
        answer,
        difficulty: FieldValue::Number(u64::from(difficulty.level())),
        category: FieldValue::Number(category),
    };

    let created = ctx
        .bank
        .add_question(&new_question)
        .context("Unable to add question")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "added",
                "id": created,
                "question": new_question,
            }))?
        );
    } else {
        match created {
            Some(id) => println!("{} question {}", "Added".green(), id.to_string().cyan()),
            None => println!("{} question", "Added".green()),
        }
    }
    Ok(())
}
