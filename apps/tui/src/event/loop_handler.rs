use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use infra_risk_map::api::SearchQuery;
use infra_risk_map::config::AppConfig;
use infra_risk_map::sync::ListEntry;
use infra_risk_map::{ApplyOutcome, GeoPoint, SearchController};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::cli::CliArgs;
use crate::ui;

/// Run one search without a UI and print the results list.
pub async fn run_headless(args: &CliArgs, config: &AppConfig) -> Result<()> {
    let source = args.search_source(config)?;
    let query = SearchQuery::new(config.default_city.clone(), config.default_radius_km);
    info!(city = %query.city, radius_km = query.radius_km, source = %source.describe(), "headless search");

    let mut controller = SearchController::new();
    let ticket = controller.begin_search();
    let result = source.fetch(&query).await;

    match controller.apply_response(ticket, result) {
        ApplyOutcome::Applied { .. } => {}
        ApplyOutcome::Failed(message) => return Err(eyre!("Search failed: {message}")),
        ApplyOutcome::Stale => return Err(eyre!("Search response was superseded")),
    }

    controller.set_view_state(args.view_state());

    if args.json {
        render_headless_json(&controller)?;
    } else {
        render_headless_report(&controller);
    }

    Ok(())
}

fn render_headless_report(controller: &SearchController) {
    let view = controller.view_state();
    let map = controller.map();
    let list = controller.list();

    println!("\nInfrastructure Risk Levels");
    println!("==========================");
    println!(
        "Center: {:.4}, {:.4} (zoom {})",
        map.center().lat,
        map.center().lon,
        map.zoom()
    );
    println!(
        "Sort: {} | Filter: {}",
        view.sort_key.label(),
        view.filter_tier.label()
    );
    println!("Total results: {}", list.total_label());

    for entry in list.entries() {
        println!(
            "\n- {} [{}] {} ({})",
            entry.title,
            entry.kind,
            entry.badge.text,
            entry.badge.tier.as_str()
        );
        for factor in &entry.factors {
            println!("    {}: {}", factor.label, factor.value);
        }
    }
}

fn render_headless_json(controller: &SearchController) -> Result<()> {
    let report = build_headless_report(controller);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

fn build_headless_report(controller: &SearchController) -> HeadlessReport<'_> {
    let map = controller.map();
    let markers = map
        .markers()
        .map(|marker| HeadlessMarker {
            name: &marker.popup.title,
            position: marker.position,
            color: marker.color.hex(),
        })
        .collect();

    HeadlessReport {
        center: map.center(),
        zoom: map.zoom(),
        view: controller.view_state(),
        total_results: controller.list().total_count(),
        entries: controller.list().entries(),
        markers,
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport<'a> {
    center: GeoPoint,
    zoom: u8,
    view: infra_risk_map::ViewState,
    total_results: usize,
    entries: &'a [ListEntry],
    markers: Vec<HeadlessMarker<'a>>,
}

#[derive(serde::Serialize)]
struct HeadlessMarker<'a> {
    name: &'a str,
    position: GeoPoint,
    color: String,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        app.update();
        app.drain_search_results();
        app.clamp_selection();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(width, height)) => {
                    debug!(width, height, "terminal resized");
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }

        // Let spawned searches make progress between frames.
        tokio::task::yield_now().await;
    }

    info!("event loop finished");
    Ok(())
}
