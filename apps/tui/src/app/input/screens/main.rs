use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

use super::{results, search_form};

pub fn handle_main_input(app: &mut App, key: KeyCode) {
    match app.focus {
        Focus::SearchForm => search_form::handle_search_form_input(app, key),
        Focus::Results => results::handle_results_input(app, key),
    }
}
