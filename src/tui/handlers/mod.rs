mod alert;
mod form;

pub use alert::handle_alert;
pub use form::handle_form;

use crate::tui::app::{App, InputMode};
use crossterm::event::KeyEvent;
use std::io;

/// Route a key press to the handler for the current mode.
/// Returns Ok(true) if the application should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match app.input_mode {
        InputMode::Form => handle_form(app, key),
        InputMode::Alert => handle_alert(app, key),
    }
}
