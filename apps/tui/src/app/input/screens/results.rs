use crate::app::input::helpers::step_down;
use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

const PAGE_STEP: usize = 5;

pub fn handle_results_input(app: &mut App, key: KeyCode) {
    let total_rows = app.result_count();

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('/') | KeyCode::Esc => {
            app.focus = Focus::SearchForm;
        }
        KeyCode::Char('r') => app.submit_search(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('b') => app.cycle_base_layer(),
        KeyCode::Char('+' | '=') => app.controller.map_mut().zoom_in(),
        KeyCode::Char('-') => app.controller.map_mut().zoom_out(),
        KeyCode::Enter => app.open_marker_popup(),
        KeyCode::Up => {
            app.selected_index = app.selected_index.saturating_sub(1);
        }
        KeyCode::Down => {
            app.selected_index = step_down(app.selected_index, 1, total_rows);
        }
        KeyCode::PageUp => {
            app.selected_index = app.selected_index.saturating_sub(PAGE_STEP);
        }
        KeyCode::PageDown => {
            app.selected_index = step_down(app.selected_index, PAGE_STEP, total_rows);
        }
        KeyCode::Home => {
            app.selected_index = 0;
        }
        KeyCode::End => {
            app.selected_index = total_rows.saturating_sub(1);
        }
        _ => {}
    }
}
