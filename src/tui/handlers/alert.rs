use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;

/// Handle Alert mode key events
/// Only dismissal gets through; the form underneath sees nothing.
pub fn handle_alert(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.dismiss_alert(),
        _ => {}
    }
    Ok(false)
}
