use crate::app::{App, Focus, SearchField};
use crate::ui::widgets::map::render_map;
use crate::ui::widgets::sidebar::render_sidebar;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Search form
            Constraint::Min(8),    // Map and list
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_search_section(app, f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);
}

fn render_search_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let border_color = if app.focus == Focus::SearchForm {
        Color::Green
    } else {
        Color::Gray
    };
    let block = Block::default()
        .title("== Infrastructure Risk Map ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(18)])
        .split(inner);

    let editing = app.focus == Focus::SearchForm;
    let cursor = if editing && (app.animation_counter * 2.0).sin() > 0.0 {
        "█"
    } else {
        " "
    };

    let lines = vec![
        form_line(
            "City",
            &app.form.city,
            editing && app.form.field == SearchField::City,
            cursor,
        ),
        form_line(
            "Radius (km)",
            &app.form.radius,
            editing && app.form.field == SearchField::Radius,
            cursor,
        ),
    ];
    f.render_widget(Paragraph::new(Text::from(lines)), chunks[0]);

    if app.controller.is_searching() {
        let throbber = Throbber::default()
            .label("Searching")
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .throbber_set(BRAILLE_SIX)
            .use_type(WhichUse::Spin);
        let mut state = app.throbber_state.clone();
        f.render_stateful_widget(throbber, chunks[1], &mut state);
    }
}

fn form_line(label: &str, value: &str, active: bool, cursor: &str) -> TextLine<'static> {
    let label_style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_text = if active {
        format!(" {value}{cursor}")
    } else {
        format!(" {value}")
    };

    TextLine::from(vec![
        Span::styled(format!("{label:>11}:"), label_style),
        Span::styled(
            value_text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_map(app, f, chunks[0]);
    render_sidebar(app, f, chunks[1]);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let mut spans = vec![Span::styled(app.status_message.as_str(), style)];
    if let Some(updated) = &app.last_updated {
        spans.push(Span::styled(
            format!("  (updated {updated})"),
            Style::default().fg(Color::Gray),
        ));
    }

    let status_paragraph = Paragraph::new(TextLine::from(spans))
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let shortcuts_paragraph = Paragraph::new(shortcuts_line()).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}

fn shortcuts_line() -> TextLine<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let shortcuts = [
        ("F1", ": Help | "),
        ("/", ": Search | "),
        ("s", ": Sort | "),
        ("f", ": Filter | "),
        ("b", ": Layer | "),
        ("+/-", ": Zoom | "),
        ("Enter", ": Details | "),
        ("q", ": Quit"),
    ];

    TextLine::from(
        shortcuts
            .into_iter()
            .flat_map(|(key, text)| [Span::styled(key, key_style), Span::styled(text, text_style)])
            .collect::<Vec<_>>(),
    )
}
