use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

use super::CommandContext;

pub fn handle_delete(ctx: &CommandContext, id: u64, force: bool) -> Result<()> {
    if !force {
        print!("Delete question {} permanently? [y/N] ", id.to_string().cyan());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = ctx
        .bank
        .delete_question(id)
        .with_context(|| format!("Unable to delete question {}", id))?;
    println!("{} question {}", "Deleted".red(), deleted.to_string().cyan());
    Ok(())
}
