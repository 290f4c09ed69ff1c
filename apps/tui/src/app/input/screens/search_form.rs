use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, Focus, SearchField};
use crossterm::event::KeyCode;

pub fn handle_search_form_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => {
            app.focus = Focus::Results;
        }
        KeyCode::Tab | KeyCode::Down => {
            let next = wrap_increment(app.form.field.index(), SearchField::ALL.len());
            app.form.field = SearchField::from_index(next);
        }
        KeyCode::BackTab | KeyCode::Up => {
            let prev = wrap_decrement(app.form.field.index(), SearchField::ALL.len());
            app.form.field = SearchField::from_index(prev);
        }
        KeyCode::Backspace => {
            app.form.active_value_mut().pop();
        }
        KeyCode::Char(c) => {
            let accepts = match app.form.field {
                SearchField::City => true,
                SearchField::Radius => c.is_ascii_digit() || c == '.',
            };
            if accepts {
                app.form.active_value_mut().push(c);
            }
        }
        _ => {}
    }
}
