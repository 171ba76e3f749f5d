use super::app::{App, InputMode, RequestState, SubmitOutcome};
use super::theme::theme;
use super::ui_modals;
use super::ui_utils::{focus_marker, text_value};
use crate::form::{Field, FormState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub const FORM_TITLE: &str = " Add a New Trivia Question ";

pub fn draw(f: &mut Frame, app: &App) {
    let [fields_area, category_area, status_area, hints_area] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    draw_fields(f, app, fields_area);
    draw_category_selector(f, app, category_area);
    draw_status_line(f, app, status_area);
    if app.show_hints {
        draw_hints(f, hints_area);
    }

    if app.input_mode == InputMode::Alert {
        ui_modals::draw_alert(f, app);
    }
}

fn draw_fields(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let form = &app.form;

    let text_row = |field: Field, placeholder: &str| {
        let focused = app.focus == field;
        let mut spans = vec![
            focus_marker(focused),
            Span::styled(format!("{:<12}", field.label()), t.label_style(focused)),
        ];
        spans.extend(text_value(&form.value(field), placeholder, focused));
        Line::from(spans)
    };

    let difficulty_focused = app.focus == Field::Difficulty;
    let mut difficulty = vec![
        focus_marker(difficulty_focused),
        Span::styled(
            format!("{:<12}", Field::Difficulty.label()),
            t.label_style(difficulty_focused),
        ),
    ];
    for option in FormState::difficulty_options() {
        let selected = form.difficulty == option.value.as_str();
        let label = if selected {
            format!("[{}]", option.label)
        } else {
            format!(" {} ", option.label)
        };
        difficulty.push(Span::styled(label, t.option_style(selected, option.disabled)));
    }

    let content = vec![
        Line::from(""),
        text_row(Field::Question, "Enter question..."),
        Line::from(""),
        text_row(Field::Answer, "Enter answer..."),
        Line::from(""),
        Line::from(difficulty),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(FORM_TITLE)
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(t.border_style(app.focus != Field::Category)),
    );
    f.render_widget(paragraph, area);
}

fn draw_category_selector(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focus == Field::Category;
    let form = &app.form;

    let items: Vec<ListItem> = form
        .category_options()
        .into_iter()
        .map(|option| {
            let selected = !option.disabled && form.category == option.value.as_str();
            let marker = if selected {
                Span::styled(
                    format!("{} ", t.row_marker),
                    Style::default().fg(t.option_selected),
                )
            } else {
                Span::raw("  ")
            };
            let id = if option.disabled {
                Span::raw("")
            } else {
                Span::styled(
                    format!("{:>4}  ", option.value),
                    Style::default().fg(t.text_muted),
                )
            };
            ListItem::new(Line::from(vec![
                marker,
                id,
                Span::styled(option.label, t.option_style(selected, option.disabled)),
            ]))
        })
        .collect();

    let mut title = vec![
        focus_marker(focused),
        Span::styled(Field::Category.label(), t.label_style(focused)),
        Span::raw(" "),
    ];
    if app.category_request == RequestState::InFlight {
        title.push(Span::styled(
            "(loading...) ",
            Style::default().fg(t.in_flight),
        ));
    } else if !form.categories.is_empty() && !form.category_is_known() {
        title.push(Span::styled(
            format!("(id {} not loaded) ", form.category),
            Style::default().fg(t.text_muted),
        ));
    }

    let list = List::new(items).block(
        Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(t.border_style(focused)),
    );
    f.render_widget(list, area);
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let mode = match app.input_mode {
        InputMode::Form => Span::styled(
            " FORM ",
            Style::default().bg(t.mode_form.0).fg(t.mode_form.1),
        ),
        InputMode::Alert => Span::styled(
            " ALERT ",
            Style::default().bg(t.mode_alert.0).fg(t.mode_alert.1),
        ),
    };

    let mut spans = vec![mode, Span::raw(" ")];
    if app.submits_in_flight > 0 {
        spans.push(Span::styled(
            format!("Submitting ({})...", app.submits_in_flight),
            Style::default().fg(t.in_flight),
        ));
    } else {
        match &app.last_submit {
            Some(SubmitOutcome::Added(Some(id))) => spans.push(Span::styled(
                format!("Question {} added", id),
                Style::default().fg(t.success),
            )),
            Some(SubmitOutcome::Added(None)) => spans.push(Span::styled(
                "Question added",
                Style::default().fg(t.success),
            )),
            Some(SubmitOutcome::Failed) => spans.push(Span::styled(
                "Last submit failed",
                Style::default().fg(t.failure),
            )),
            None => {}
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hints(f: &mut Frame, area: Rect) {
    let t = theme();
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(t.field_label)
                .add_modifier(Modifier::BOLD),
        )
    };
    let text = |s: &'static str| Span::styled(s, Style::default().fg(t.text_muted));

    let line = Line::from(vec![
        key(" Tab"),
        text(" next  "),
        key("←/→"),
        text(" choose  "),
        key("Enter"),
        text(" submit  "),
        key("Esc"),
        text(" quit"),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
