use crate::api::error::SearchError;
use crate::domain::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier attached by the backend. Numeric in practice, but not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// One geolocated infrastructure item returned by a search.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InfrastructureRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    pub risk_score: f64,
    #[serde(default)]
    pub risk_factors: BTreeMap<String, f64>,
}

impl InfrastructureRecord {
    pub const fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Form body posted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub city: String,
    #[serde(rename = "radius")]
    pub radius_km: f64,
}

impl SearchQuery {
    pub fn new(city: impl Into<String>, radius_km: f64) -> Self {
        Self {
            city: city.into(),
            radius_km,
        }
    }
}

/// Raw `/search` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub infrastructure: Vec<InfrastructureRecord>,
    #[serde(default)]
    pub center: Option<(f64, f64)>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successful search, ready to be applied to the result store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub records: Vec<InfrastructureRecord>,
    pub center: Option<GeoPoint>,
}

impl SearchResponse {
    /// Splits the envelope: `success=false` becomes [`SearchError::Rejected`].
    pub fn into_results(self) -> Result<SearchResults, SearchError> {
        if !self.success {
            let message = self
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(SearchError::Rejected(message));
        }

        Ok(SearchResults {
            records: self.infrastructure,
            center: self.center.map(GeoPoint::from),
        })
    }
}
