use crate::api::QuestionBank;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

pub fn handle_categories(ctx: &CommandContext, json: bool) -> Result<()> {
    let response = ctx
        .bank
        .categories()
        .context("Unable to load categories")?;
    if response.categories.is_none() {
        tracing::warn!("category response had no categories mapping");
    }
    let categories = response.into_map();

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    if categories.is_empty() {
        println!("No categories available");
        return Ok(());
    }
    for (id, name) in categories.entries() {
        println!("{:>4}  {}", id.cyan(), name);
    }
    Ok(())
}
