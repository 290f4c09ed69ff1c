use crate::api::error::SearchError;
use crate::api::models::{SearchQuery, SearchResponse, SearchResults};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the backend `/search` endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts the query form-encoded and decodes the JSON envelope.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError> {
        debug!(endpoint = %self.endpoint, city = %query.city, radius_km = query.radius_km, "posting search");

        let response = self.http.post(&self.endpoint).form(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The backend reports its own failures inside the envelope; prefer that message.
            if let Ok(envelope) = serde_json::from_str::<SearchResponse>(&body) {
                if envelope.error.is_some() {
                    return envelope.into_results();
                }
            }
            warn!(status = status.as_u16(), "search endpoint returned an error status");
            return Err(SearchError::Status(status.as_u16()));
        }

        parse_response(&body)
    }
}

pub fn parse_response(body: &str) -> Result<SearchResults, SearchError> {
    serde_json::from_str::<SearchResponse>(body)?.into_results()
}
