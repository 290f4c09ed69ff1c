//! Owns the result store, the control selections and both surfaces, and keeps
//! them consistent.
//!
//! Searches are tagged with a sequence number when issued. Only the response
//! to the most recent request is applied; older ones are dropped, so
//! overlapping searches resolve deterministically regardless of arrival order.

use crate::api::error::SearchError;
use crate::api::models::{InfrastructureRecord, SearchResults};
use crate::domain::{SortKey, TierFilter, ViewState};
use crate::projector::project;
use crate::store::ResultStore;
use crate::sync::map::DEFAULT_ZOOM;
use crate::sync::{list, map, ListView, MapView};
use tracing::{debug, info, warn};

/// Handle for one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// What happened to a response handed to [`SearchController::apply_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Results replaced the store; `shown` is the projected count.
    Applied { total: usize, shown: usize },
    /// The latest search failed. Prior state is untouched.
    Failed(String),
    /// A newer search was issued after this one; nothing changed.
    Stale,
}

#[derive(Debug, Default)]
pub struct SearchController {
    store: ResultStore,
    view: ViewState,
    projection: Vec<InfrastructureRecord>,
    map: MapView,
    list: ListView,
    issued: u64,
    resolved: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(map: MapView) -> Self {
        Self {
            map,
            ..Self::default()
        }
    }

    pub fn begin_search(&mut self) -> RequestTicket {
        self.issued += 1;
        debug!(sequence = self.issued, "search issued");
        RequestTicket(self.issued)
    }

    /// True while the most recently issued search has not been answered.
    pub const fn is_searching(&self) -> bool {
        self.resolved < self.issued
    }

    pub fn apply_response(
        &mut self,
        ticket: RequestTicket,
        result: Result<SearchResults, SearchError>,
    ) -> ApplyOutcome {
        if ticket.0 != self.issued {
            debug!(
                sequence = ticket.0,
                latest = self.issued,
                "discarding stale search response"
            );
            return ApplyOutcome::Stale;
        }
        self.resolved = ticket.0;

        match result {
            Ok(results) => {
                let center = results.center;
                self.store.replace_results(results);
                self.view = ViewState::default();
                if let Some(center) = center {
                    self.map.set_view(center, DEFAULT_ZOOM);
                }
                self.refresh();
                info!(
                    sequence = ticket.0,
                    total = self.store.len(),
                    "search results applied"
                );
                ApplyOutcome::Applied {
                    total: self.store.len(),
                    shown: self.projection.len(),
                }
            }
            Err(error) => {
                warn!(sequence = ticket.0, %error, "search failed");
                ApplyOutcome::Failed(error.to_string())
            }
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.view.sort_key = sort_key;
        self.refresh();
    }

    pub fn set_filter_tier(&mut self, filter_tier: TierFilter) {
        self.view.filter_tier = filter_tier;
        self.refresh();
    }

    pub fn set_view_state(&mut self, view: ViewState) {
        self.view = view;
        self.refresh();
    }

    /// Re-projects the stored results and rebuilds both surfaces.
    pub fn refresh(&mut self) {
        self.projection = project(self.store.current(), &self.view);
        map::render(&mut self.map, &self.projection);
        list::render(&mut self.list, &self.projection);
        debug!(
            sort = self.view.sort_key.as_str(),
            filter = self.view.filter_tier.as_str(),
            shown = self.projection.len(),
            "surfaces re-rendered"
        );
    }

    pub const fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn projection(&self) -> &[InfrastructureRecord] {
        &self.projection
    }

    pub const fn store(&self) -> &ResultStore {
        &self.store
    }

    pub const fn map(&self) -> &MapView {
        &self.map
    }

    /// Pan/zoom and base-layer changes; markers are only touched by [`Self::refresh`].
    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    pub const fn list(&self) -> &ListView {
        &self.list
    }
}
