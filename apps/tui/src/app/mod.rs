// App module for infra-risk-map
// Handles application state and input dispatch

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, Focus, SearchField};
