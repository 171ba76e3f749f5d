use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
};

use super::theme::theme;

/// Calculate a centered rectangle within a parent rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Focus arrow in front of a field row
pub fn focus_marker(focused: bool) -> Span<'static> {
    Span::styled(
        if focused { "▶ " } else { "  " },
        Style::default().fg(theme().field_cursor),
    )
}

/// Text value with a trailing cursor when focused, or a muted placeholder when empty
pub fn text_value(value: &str, placeholder: &str, focused: bool) -> Vec<Span<'static>> {
    let t = theme();
    let mut spans = Vec::with_capacity(2);
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(t.text_muted),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(t.text)));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(t.field_cursor)));
    }
    spans
}
