use super::app::App;
use super::theme::theme;
use super::ui_utils;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn draw_alert(f: &mut Frame, app: &App) {
    let Some(message) = app.current_alert() else {
        return;
    };
    let area = ui_utils::centered_rect(60, 30, f.area());
    let t = theme();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(t.text_highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(t.text_muted),
        )),
    ];
    if app.alerts.len() > 1 {
        content.push(Line::from(Span::styled(
            format!("({} more)", app.alerts.len() - 1),
            Style::default().fg(t.text_muted),
        )));
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Alert ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border_alert)),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
