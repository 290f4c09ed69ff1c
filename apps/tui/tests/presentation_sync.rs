use infra_risk_map::api::fixture::load_response;
use infra_risk_map::api::{SearchError, SearchResults};
use infra_risk_map::sync::map::DEFAULT_ZOOM;
use infra_risk_map::{ApplyOutcome, SearchController, SortKey, Tier, TierFilter, ViewState};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

async fn washington() -> Result<SearchResults, SearchError> {
    load_response(fixture("washington.json")).await
}

fn list_titles(controller: &SearchController) -> Vec<&str> {
    controller
        .list()
        .entries()
        .iter()
        .map(|entry| entry.title.as_str())
        .collect()
}

fn marker_titles(controller: &SearchController) -> Vec<&str> {
    controller
        .map()
        .markers()
        .map(|marker| marker.popup.title.as_str())
        .collect()
}

#[tokio::test]
async fn search_populates_map_and_list_in_the_same_order() {
    let mut controller = SearchController::new();
    let ticket = controller.begin_search();
    let outcome = controller.apply_response(ticket, washington().await);

    assert_eq!(outcome, ApplyOutcome::Applied { total: 6, shown: 6 });
    assert_eq!(
        list_titles(&controller),
        [
            "Arlington Memorial Bridge",
            "constitution Avenue",
            "Key Bridge",
            "Metro Center",
            "Pennsylvania Avenue Northwest",
            "Union Station",
        ]
    );
    assert_eq!(marker_titles(&controller), list_titles(&controller));
    assert_eq!(controller.list().total_label(), "6");

    let center = controller.map().center();
    assert!((center.lat - 38.895_036_8).abs() < 1e-9);
    assert!((center.lon + 77.036_542_7).abs() < 1e-9);
    assert_eq!(controller.map().zoom(), DEFAULT_ZOOM);
}

#[tokio::test]
async fn controls_reproject_both_surfaces_without_a_new_search() {
    let mut controller = SearchController::new();
    let ticket = controller.begin_search();
    controller.apply_response(ticket, washington().await);

    controller.set_sort_key(SortKey::Risk);
    assert_eq!(
        list_titles(&controller),
        [
            "Arlington Memorial Bridge",
            "Key Bridge",
            "Pennsylvania Avenue Northwest",
            "constitution Avenue",
            "Metro Center",
            "Union Station",
        ]
    );

    controller.set_filter_tier(TierFilter::Only(Tier::Critical));
    assert_eq!(list_titles(&controller), ["Arlington Memorial Bridge", "Key Bridge"]);
    assert_eq!(marker_titles(&controller), list_titles(&controller));
    assert_eq!(controller.list().total_label(), "2");

    controller.set_view_state(ViewState::new(SortKey::Type, TierFilter::All));
    assert_eq!(
        list_titles(&controller),
        [
            "Arlington Memorial Bridge",
            "Key Bridge",
            "Union Station",
            "Metro Center",
            "Pennsylvania Avenue Northwest",
            "constitution Avenue",
        ]
    );
    assert!(!controller.is_searching());
    assert_eq!(controller.store().len(), 6);
}

#[tokio::test]
async fn markers_carry_tier_colors() {
    let mut controller = SearchController::new();
    let ticket = controller.begin_search();
    controller.apply_response(ticket, washington().await);
    controller.set_sort_key(SortKey::Risk);

    let colors: Vec<String> = controller
        .map()
        .markers()
        .map(|marker| marker.fill_color.hex())
        .collect();
    assert_eq!(
        colors,
        ["#ff0000", "#ff0000", "#ffa500", "#ffff00", "#ffff00", "#00ff00"]
    );
}

#[tokio::test]
async fn failed_search_leaves_everything_in_place() {
    let mut controller = SearchController::new();
    let first = controller.begin_search();
    controller.apply_response(first, washington().await);
    controller.set_filter_tier(TierFilter::Only(Tier::Moderate));

    let second = controller.begin_search();
    let outcome =
        controller.apply_response(second, load_response(fixture("failure.json")).await);

    assert_eq!(
        outcome,
        ApplyOutcome::Failed("Could not geocode city: Atlantis".to_string())
    );
    assert_eq!(controller.store().len(), 6);
    assert_eq!(
        controller.view_state().filter_tier,
        TierFilter::Only(Tier::Moderate)
    );
    assert_eq!(list_titles(&controller), ["constitution Avenue", "Metro Center"]);
    assert!(!controller.is_searching());
}

#[tokio::test]
async fn only_the_latest_search_is_applied() {
    let mut controller = SearchController::new();
    let older = controller.begin_search();
    let newer = controller.begin_search();

    let outcome = controller.apply_response(newer, washington().await);
    assert_eq!(outcome, ApplyOutcome::Applied { total: 6, shown: 6 });

    let late = controller.apply_response(older, Ok(SearchResults::default()));
    assert_eq!(late, ApplyOutcome::Stale);
    assert_eq!(controller.store().len(), 6);
    assert_eq!(controller.map().marker_count(), 6);
}

#[tokio::test]
async fn missing_fixture_is_an_io_error() {
    let result = load_response(fixture("does-not-exist.json")).await;
    assert!(matches!(result, Err(SearchError::Io(_))));
}
