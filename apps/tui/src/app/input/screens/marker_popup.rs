use crate::app::input::helpers::step_down;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_marker_popup_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter => {
            app.screen = AppScreen::Main;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        // The popup follows the selection.
        KeyCode::Up => {
            app.selected_index = app.selected_index.saturating_sub(1);
        }
        KeyCode::Down => {
            app.selected_index = step_down(app.selected_index, 1, app.result_count());
        }
        _ => {}
    }
}
