use infra_risk_map::api::{SearchError, SearchQuery, SearchResults, SearchSource};
use infra_risk_map::config::AppConfig;
use infra_risk_map::sync::CircleMarker;
use infra_risk_map::{ApplyOutcome, RequestTicket, SearchController, ViewState};
use std::time::Instant;
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Main,
    MarkerPopup,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchField {
    City,
    Radius,
}

impl SearchField {
    pub const ALL: [Self; 2] = [Self::City, Self::Radius];

    pub const fn index(self) -> usize {
        match self {
            Self::City => 0,
            Self::Radius => 1,
        }
    }

    pub const fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Radius,
            _ => Self::City,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    SearchForm,
    Results,
}

/// Editable contents of the search form.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub city: String,
    pub radius: String,
    pub field: SearchField,
}

impl SearchForm {
    pub fn new(city: &str, radius_km: f64) -> Self {
        Self {
            city: city.to_string(),
            radius: radius_km.to_string(),
            field: SearchField::City,
        }
    }

    pub fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            SearchField::City => &mut self.city,
            SearchField::Radius => &mut self.radius,
        }
    }

    pub fn to_query(&self) -> Result<SearchQuery, String> {
        let city = self.city.trim();
        if city.is_empty() {
            return Err("Enter a city to search.".to_string());
        }

        match self.radius.trim().parse::<f64>() {
            Ok(radius) if radius.is_finite() && radius > 0.0 => Ok(SearchQuery::new(city, radius)),
            _ => Err(format!("Invalid radius: {}", self.radius.trim())),
        }
    }
}

/// A finished search on its way back to the UI thread.
#[derive(Debug)]
pub struct SearchMessage {
    pub ticket: RequestTicket,
    pub result: Result<SearchResults, SearchError>,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub focus: Focus,
    pub form: SearchForm,
    pub controller: SearchController,
    pub source: SearchSource,
    pub selected_index: usize,
    pub status_message: String,
    pub last_updated: Option<String>,
    pub show_help: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub throbber_state: ThrobberState,
    /// Controls requested on the command line, reapplied once the first
    /// search lands (applying results resets the controls).
    initial_view: Option<ViewState>,
    results_tx: UnboundedSender<SearchMessage>,
    results_rx: UnboundedReceiver<SearchMessage>,
}

impl App {
    pub fn new(config: &AppConfig, source: SearchSource) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            screen: AppScreen::Main,
            focus: Focus::SearchForm,
            form: SearchForm::new(&config.default_city, config.default_radius_km),
            controller: SearchController::new(),
            source,
            selected_index: 0,
            status_message: "Enter a city and press Enter to search.".to_string(),
            last_updated: None,
            show_help: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            throbber_state: ThrobberState::default(),
            initial_view: None,
            results_tx,
            results_rx,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.controller.is_searching() {
            self.throbber_state.calc_next();
        }
    }

    pub fn set_initial_view(&mut self, view: ViewState) {
        self.controller.set_view_state(view);
        if view != ViewState::default() {
            self.initial_view = Some(view);
        }
    }

    /// Issues a search for the form contents without blocking the UI.
    pub fn submit_search(&mut self) {
        let query = match self.form.to_query() {
            Ok(query) => query,
            Err(message) => {
                self.status_message = message;
                return;
            }
        };

        let ticket = self.controller.begin_search();
        info!(
            sequence = ticket.sequence(),
            city = %query.city,
            radius_km = query.radius_km,
            source = %self.source.describe(),
            "search submitted"
        );
        self.status_message = format!("Searching {}...", query.city);
        self.focus = Focus::Results;

        let source = self.source.clone();
        let results_tx = self.results_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(&query).await;
            // The receiver only goes away on shutdown.
            let _ = results_tx.send(SearchMessage { ticket, result });
        });
    }

    /// Applies every search result that has arrived since the last tick.
    pub fn drain_search_results(&mut self) {
        while let Ok(message) = self.results_rx.try_recv() {
            self.apply_search_message(message);
        }
    }

    pub fn apply_search_message(&mut self, message: SearchMessage) {
        match self.controller.apply_response(message.ticket, message.result) {
            ApplyOutcome::Applied { total, mut shown } => {
                if let Some(view) = self.initial_view.take() {
                    self.controller.set_view_state(view);
                    shown = self.result_count();
                }
                self.selected_index = 0;
                self.screen = AppScreen::Main;
                self.last_updated = Some(chrono::Local::now().format("%H:%M:%S").to_string());
                self.status_message = format!("Found {total} infrastructure points ({shown} shown)");
            }
            ApplyOutcome::Failed(message) => {
                self.status_message = format!("Error: {message}");
            }
            ApplyOutcome::Stale => {}
        }
    }

    pub fn cycle_sort(&mut self) {
        let next = self.controller.view_state().sort_key.next();
        self.controller.set_sort_key(next);
        self.selected_index = 0;
        self.status_message = format!("Sorted by {}", next.label());
    }

    pub fn cycle_filter(&mut self) {
        let next = self.controller.view_state().filter_tier.next();
        self.controller.set_filter_tier(next);
        self.selected_index = 0;
        self.clamp_selection();
        self.status_message = format!("Showing {} risk", next.label());
    }

    pub fn cycle_base_layer(&mut self) {
        let map = self.controller.map_mut();
        let next = map.base_layer().unwrap_or_default().next();
        map.set_base_layer(next);
        self.status_message = format!("Base layer: {}", next.label());
    }

    pub fn result_count(&self) -> usize {
        self.controller.projection().len()
    }

    pub fn selected_marker(&self) -> Option<&CircleMarker> {
        self.controller.map().marker(self.selected_index)
    }

    pub fn open_marker_popup(&mut self) {
        if self.selected_marker().is_some() {
            self.screen = AppScreen::MarkerPopup;
        }
    }

    pub fn clamp_selection(&mut self) {
        let count = self.result_count();
        if count == 0 {
            self.selected_index = 0;
            if self.screen == AppScreen::MarkerPopup {
                self.screen = AppScreen::Main;
            }
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    #[cfg(test)]
    pub async fn wait_for_search(&mut self) {
        if let Some(message) = self.results_rx.recv().await {
            self.apply_search_message(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_risk_map::domain::{SortKey, Tier, TierFilter};
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn app_with(name: &str) -> App {
        App::new(&AppConfig::default(), SearchSource::Fixture(fixture(name)))
    }

    #[test]
    fn form_validates_city_and_radius() {
        let mut form = SearchForm::new("", 5.0);
        assert!(form.to_query().is_err());

        form.city = "Baltimore".to_string();
        form.radius = "abc".to_string();
        assert_eq!(form.to_query(), Err("Invalid radius: abc".to_string()));

        form.radius = " 2.5 ".to_string();
        assert_eq!(form.to_query(), Ok(SearchQuery::new("Baltimore", 2.5)));
    }

    #[tokio::test]
    async fn search_populates_both_surfaces() {
        let mut app = app_with("washington.json");
        app.submit_search();
        assert!(app.controller.is_searching());

        app.wait_for_search().await;
        assert!(!app.controller.is_searching());
        assert_eq!(app.result_count(), 6);
        assert_eq!(app.controller.map().marker_count(), 6);
        assert_eq!(app.controller.list().total_count(), 6);
        assert!(app.last_updated.is_some());
    }

    #[tokio::test]
    async fn failed_search_keeps_previous_results() {
        let mut app = app_with("washington.json");
        app.submit_search();
        app.wait_for_search().await;

        app.source = SearchSource::Fixture(fixture("failure.json"));
        app.submit_search();
        app.wait_for_search().await;

        assert_eq!(app.status_message, "Error: Could not geocode city: Atlantis");
        assert_eq!(app.result_count(), 6);
    }

    #[tokio::test]
    async fn cycling_controls_reprojects_without_searching() {
        let mut app = app_with("washington.json");
        app.submit_search();
        app.wait_for_search().await;

        app.cycle_sort();
        assert_eq!(app.controller.view_state().sort_key, SortKey::Risk);
        assert_eq!(
            app.selected_marker().map(|m| m.popup.title.as_str()),
            Some("Arlington Memorial Bridge")
        );

        app.cycle_filter();
        assert_eq!(
            app.controller.view_state().filter_tier,
            TierFilter::Only(Tier::Critical)
        );
        assert_eq!(app.result_count(), 2);
        assert_eq!(app.controller.list().total_label(), "2");
        assert!(!app.controller.is_searching());
    }

    #[tokio::test]
    async fn command_line_controls_survive_the_first_search() {
        let mut app = app_with("washington.json");
        app.set_initial_view(ViewState::new(SortKey::Risk, TierFilter::Only(Tier::Critical)));
        app.submit_search();
        app.wait_for_search().await;

        assert_eq!(
            app.controller.view_state(),
            ViewState::new(SortKey::Risk, TierFilter::Only(Tier::Critical))
        );
        assert_eq!(app.result_count(), 2);
        assert_eq!(
            app.selected_marker().map(|m| m.popup.title.as_str()),
            Some("Arlington Memorial Bridge")
        );
        assert_eq!(app.status_message, "Found 6 infrastructure points (2 shown)");

        // Later searches reset the controls as usual.
        app.submit_search();
        app.wait_for_search().await;
        assert_eq!(app.controller.view_state(), ViewState::default());
    }

    #[test]
    fn popup_needs_a_selection() {
        let mut app = app_with("washington.json");
        app.open_marker_popup();
        assert_eq!(app.screen, AppScreen::Main);
    }
}
