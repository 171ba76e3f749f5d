//! Central theme configuration for the TUI.
//!
//! All colors and styles are defined here to keep the form and its alerts
//! consistent.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,
    pub row_marker: &'static str,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_highlight: Color,

    // Field values
    pub field_label: Color,
    pub field_cursor: Color,
    pub option_selected: Color,
    pub option_disabled: Color,

    // Modal colors
    pub modal_border_alert: Color,

    // Footer/Mode colors
    pub mode_form: (Color, Color), // (bg, fg)
    pub mode_alert: (Color, Color),

    // Status line
    pub in_flight: Color,
    pub success: Color,
    pub failure: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Monokai color scheme
        Self {
            border: Color::Rgb(117, 113, 94),         // Muted brownish-gray
            border_focused: Color::Rgb(166, 226, 46), // Monokai green
            row_marker: "▸",

            text: Color::Rgb(248, 248, 242),           // Monokai foreground
            text_muted: Color::Rgb(117, 113, 94),      // Comment color
            text_highlight: Color::Rgb(248, 248, 242), // Bright foreground

            field_label: Color::Rgb(102, 217, 239),      // Blue
            field_cursor: Color::Rgb(102, 217, 239),     // Blue
            option_selected: Color::Rgb(166, 226, 46),   // Green
            option_disabled: Color::Rgb(117, 113, 94),   // Muted

            modal_border_alert: Color::Rgb(249, 38, 114), // Pink/red

            mode_form: (Color::Rgb(102, 217, 239), Color::Rgb(39, 40, 34)), // Blue bg
            mode_alert: (Color::Rgb(249, 38, 114), Color::Rgb(248, 248, 242)), // Pink bg

            in_flight: Color::Rgb(230, 219, 116), // Yellow
            success: Color::Rgb(166, 226, 46),    // Green
            failure: Color::Rgb(249, 38, 114),    // Pink
        }
    }
}

impl Theme {
    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Style for a field label
    pub fn label_style(&self, focused: bool) -> Style {
        let style = Style::default().fg(if focused {
            self.field_label
        } else {
            self.text
        });
        style.add_modifier(Modifier::BOLD)
    }

    /// Style for a selector option
    pub fn option_style(&self, selected: bool, disabled: bool) -> Style {
        if disabled {
            Style::default()
                .fg(self.option_disabled)
                .add_modifier(Modifier::ITALIC)
        } else if selected {
            Style::default()
                .fg(self.option_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
