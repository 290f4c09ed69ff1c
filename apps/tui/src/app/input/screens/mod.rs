use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod help;
mod main;
mod marker_popup;
mod results;
mod search_form;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::MarkerPopup => marker_popup::handle_marker_popup_input(app, key),
        AppScreen::Main => main::handle_main_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Focus, SearchField};
    use infra_risk_map::api::SearchSource;
    use infra_risk_map::config::AppConfig;
    use infra_risk_map::domain::{SortKey, TierFilter};

    fn app() -> App {
        App::new(
            &AppConfig::default(),
            SearchSource::Fixture("unused.json".into()),
        )
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    #[test]
    fn typing_edits_the_active_field() {
        let mut app = app();
        app.form.city.clear();
        press(
            &mut app,
            &[KeyCode::Char('R'), KeyCode::Char('i'), KeyCode::Char('o'), KeyCode::Backspace],
        );
        assert_eq!(app.form.city, "Ri");

        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.form.field, SearchField::Radius);
        press(&mut app, &[KeyCode::Char('x'), KeyCode::Char('7')]);
        assert!(app.form.radius.ends_with('7'));
        assert!(!app.form.radius.contains('x'));
    }

    #[test]
    fn escape_moves_focus_to_results_and_slash_returns() {
        let mut app = app();
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.focus, Focus::Results);
        press(&mut app, &[KeyCode::Char('/')]);
        assert_eq!(app.focus, Focus::SearchForm);
    }

    #[test]
    fn control_keys_only_apply_in_results_focus() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.controller.view_state().sort_key, SortKey::Name);

        press(&mut app, &[KeyCode::Esc, KeyCode::Char('s'), KeyCode::Char('f')]);
        assert_eq!(app.controller.view_state().sort_key, SortKey::Risk);
        assert_ne!(app.controller.view_state().filter_tier, TierFilter::All);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, &[KeyCode::F(1), KeyCode::Char('q')]);
        assert!(app.show_help);
        assert!(app.running);

        press(&mut app, &[KeyCode::Esc, KeyCode::Esc, KeyCode::Char('q')]);
        assert!(!app.show_help);
        assert!(!app.running);
    }

    #[test]
    fn zoom_keys_change_map_zoom() {
        let mut app = app();
        let before = app.controller.map().zoom();
        press(&mut app, &[KeyCode::Esc, KeyCode::Char('-'), KeyCode::Char('-'), KeyCode::Char('+')]);
        assert_eq!(app.controller.map().zoom(), before - 1);
    }
}
