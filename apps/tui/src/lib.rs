// Presentation core, shared by the terminal binary and the integration tests
pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod logging;
pub mod projector;
pub mod risk;
pub mod store;
pub mod sync;

pub use controller::{ApplyOutcome, RequestTicket, SearchController};
pub use domain::{GeoPoint, SortKey, Tier, TierFilter, ViewState};
