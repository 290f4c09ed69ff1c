pub mod client;
pub mod error;
pub mod fixture;
pub mod models;

pub use client::SearchClient;
pub use error::SearchError;
pub use models::{InfrastructureRecord, RecordId, SearchQuery, SearchResponse, SearchResults};

use std::path::PathBuf;

/// Where search results come from: the live backend or a saved response.
#[derive(Debug, Clone)]
pub enum SearchSource {
    Remote(SearchClient),
    Fixture(PathBuf),
}

impl SearchSource {
    pub async fn fetch(&self, query: &SearchQuery) -> Result<SearchResults, SearchError> {
        match self {
            Self::Remote(client) => client.search(query).await,
            Self::Fixture(path) => fixture::load_response(path).await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Remote(client) => client.endpoint().to_string(),
            Self::Fixture(path) => format!("file {}", path.display()),
        }
    }
}
