use crate::app::App;
use crate::ui::widgets::palette::{base_layer_colors, risk_color};
use infra_risk_map::sync::{BaseLayer, CircleMarker, MapView};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

// Tile pixels per degree of longitude at zoom 0.
const DEGREES_PER_TILE_PX: f64 = 360.0 / 256.0;

/// Marker radius in canvas units for the current zoom.
fn marker_radius(map: &MapView, marker: &CircleMarker) -> f64 {
    f64::from(marker.radius) * DEGREES_PER_TILE_PX / 2_f64.powi(i32::from(map.zoom()))
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let map = app.controller.map();
    let base = map.base_layer().unwrap_or_default();
    let (background, coastline) = base_layer_colors(base);

    let block = Block::default()
        .title(format!(" Map: {} | zoom {} ", base.label(), map.zoom()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(TextLine::from(Span::styled(
            base.attribution(),
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 3 {
        return;
    }

    let viewport = map.viewport(inner.width, inner.height);
    let selected = app.selected_index;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(background)
        .x_bounds(viewport.lon_bounds)
        .y_bounds(viewport.lat_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: coastline,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for (index, marker) in map.markers().enumerate() {
                if !viewport.contains(marker.position) {
                    continue;
                }
                let color = risk_color(marker.fill_color);
                ctx.draw(&Circle {
                    x: marker.position.lon,
                    y: marker.position.lat,
                    radius: marker_radius(map, marker),
                    color,
                });
                ctx.draw(&Points {
                    coords: &[(marker.position.lon, marker.position.lat)],
                    color,
                });

                if index == selected {
                    ctx.print(
                        marker.position.lon,
                        marker.position.lat,
                        Span::styled(
                            format!(" {}", marker.popup.title),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });
    f.render_widget(canvas, inner);

    if map.marker_count() == 0 {
        render_empty_hint(f, inner, base);
    }
}

fn render_empty_hint(f: &mut Frame<'_>, area: Rect, base: BaseLayer) {
    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let hint = Paragraph::new(Span::styled(
        format!("No markers ({} tiles)", base.label()),
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, hint_area);
}
