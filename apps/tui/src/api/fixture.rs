use crate::api::client::parse_response;
use crate::api::error::SearchError;
use crate::api::models::SearchResults;
use std::path::Path;
use tracing::debug;

/// Loads a saved `/search` response body from disk.
pub async fn load_response(path: impl AsRef<Path>) -> Result<SearchResults, SearchError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading search response from file");
    let body = tokio::fs::read_to_string(path).await?;
    parse_response(&body)
}
