use anyhow::Result;
use std::sync::Arc;

use super::CommandContext;

pub fn handle_form(ctx: CommandContext) -> Result<()> {
    crate::tui::run_tui(Arc::new(ctx.bank), &ctx.config.tui)?;
    Ok(())
}
