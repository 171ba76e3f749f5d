use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// Handle Form mode key events
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_form(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let focus = app.focus;

    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('c') if ctrl => return Ok(true),
        KeyCode::Enter => app.submit(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Char('u') if ctrl && focus.is_text() => app.change_focused(String::new()),
        KeyCode::Char(c) if focus.is_text() && !ctrl => {
            let mut value = app.form.value(focus).to_string();
            value.push(c);
            app.change_focused(value);
        }
        KeyCode::Backspace if focus.is_text() => {
            let mut value = app.form.value(focus).to_string();
            value.pop();
            app.change_focused(value);
        }
        KeyCode::Right | KeyCode::Char(' ') if !focus.is_text() => app.form.cycle(focus, true),
        KeyCode::Left if !focus.is_text() => app.form.cycle(focus, false),
        // Digits pick a difficulty directly
        KeyCode::Char(c @ '1'..='5') if focus == crate::form::Field::Difficulty => {
            app.change_focused(c.to_string());
        }
        _ => {}
    }

    Ok(false)
}
