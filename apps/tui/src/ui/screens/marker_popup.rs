use crate::app::App;
use crate::ui::widgets::palette::risk_color;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_marker_popup(app: &App, f: &mut Frame<'_>) {
    let Some(marker) = app.selected_marker() else {
        return;
    };

    let popup_area = centered_rect(50, 50, f.area());
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(format!(" {} ", marker.popup.title))
        .title_style(
            Style::default()
                .fg(risk_color(marker.color))
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(
            TextLine::from(" Esc: Close | ↑/↓: Previous/Next ").alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(risk_color(marker.color)));

    let mut lines: Vec<TextLine<'_>> = marker
        .popup
        .lines()
        .into_iter()
        .map(TextLine::from)
        .collect();
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        format!("{:.5}, {:.5}", marker.position.lat, marker.position.lon),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);
}
