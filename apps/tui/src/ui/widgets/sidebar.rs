use crate::app::{App, Focus};
use crate::ui::widgets::palette::tier_color;
use crate::ui::widgets::tables::scroll_offset;
use infra_risk_map::sync::ListEntry;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let list = app.controller.list();
    let view = app.controller.view_state();

    let border_color = if app.focus == Focus::Results {
        Color::Yellow
    } else {
        Color::Gray
    };
    let block = Block::default()
        .title(format!(
            " Infrastructure Risk Levels | Total: {} ",
            list.total_label()
        ))
        .title_bottom(format!(
            " Sort: {} | Filter: {} ",
            view.sort_key.label(),
            view.filter_tier.label()
        ))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if list.is_empty() {
        let message = if app.controller.store().is_empty() {
            "No results yet."
        } else {
            "No infrastructure matches this filter."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Type"),
        Cell::from("Risk"),
        Cell::from("Factors"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let entries = list.entries();
    // Borders plus the header row.
    let max_visible_rows = usize::from(area.height.saturating_sub(3));
    let offset = scroll_offset(entries.len(), max_visible_rows, app.selected_index);

    let rows = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, entry)| entry_row(entry, index == app.selected_index));

    let widths = [
        Constraint::Percentage(34),
        Constraint::Percentage(18),
        Constraint::Length(17),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block).column_spacing(1);
    f.render_widget(table, area);
}

fn entry_row(entry: &ListEntry, is_selected: bool) -> Row<'static> {
    let badge_style = Style::default()
        .fg(Color::Black)
        .bg(tier_color(entry.badge.tier))
        .add_modifier(Modifier::BOLD);

    let factors = entry
        .factors
        .iter()
        .map(|factor| format!("{}: {}", factor.label, factor.value))
        .collect::<Vec<_>>()
        .join(", ");

    let row = Row::new(vec![
        Cell::from(entry.title.clone()),
        Cell::from(entry.kind.clone()),
        Cell::from(entry.badge.text.clone()).style(badge_style),
        Cell::from(factors),
    ]);

    if is_selected {
        row.style(
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        row
    }
}
