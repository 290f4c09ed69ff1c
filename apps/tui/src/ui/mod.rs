// UI module for infra-risk-map
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::main::render_main(app, f);

    if app.screen == AppScreen::MarkerPopup {
        screens::marker_popup::render_marker_popup(app, f);
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
