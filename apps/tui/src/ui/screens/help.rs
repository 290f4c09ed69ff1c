use crate::ui::widgets::palette::risk_color;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use infra_risk_map::risk::{color_for, CRITICAL_THRESHOLD, HIGH_THRESHOLD, MODERATE_THRESHOLD};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(70, 80, f.area());
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn key_line(key: &'static str, text: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(text),
    ])
}

fn legend_line(label: &'static str, range: String, score: f64) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled("  ■ ", Style::default().fg(risk_color(color_for(score)))),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(range),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    vec![
        TextLine::from(Span::styled(
            "Infrastructure Risk Map",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Search a city to plot nearby infrastructure colored by risk score."),
        TextLine::from(""),
        TextLine::from(Span::styled("Search form:", bold)),
        key_line("  Tab/↑/↓", " - Switch between city and radius"),
        key_line("  Enter", " - Run the search"),
        key_line("  Esc", " - Move to the results"),
        TextLine::from(""),
        TextLine::from(Span::styled("Results:", bold)),
        key_line("  ↑/↓ PgUp/PgDn Home/End", " - Select a result"),
        key_line("  Enter", " - Show marker details"),
        key_line("  s", " - Cycle sort (Name, Risk Score, Type)"),
        key_line("  f", " - Cycle risk filter"),
        key_line("  b", " - Cycle base layer"),
        key_line("  + / -", " - Zoom in / out"),
        key_line("  r", " - Repeat the last search"),
        key_line("  /", " - Edit the search"),
        key_line("  q", " - Quit application"),
        TextLine::from(""),
        TextLine::from(Span::styled("Risk levels:", bold)),
        legend_line("Critical", format!(" score >= {CRITICAL_THRESHOLD}"), CRITICAL_THRESHOLD),
        legend_line("High", format!(" score >= {HIGH_THRESHOLD}"), HIGH_THRESHOLD),
        legend_line("Moderate", format!(" score >= {MODERATE_THRESHOLD}"), MODERATE_THRESHOLD),
        legend_line("Low", format!(" score < {MODERATE_THRESHOLD}"), 0.0),
    ]
}
