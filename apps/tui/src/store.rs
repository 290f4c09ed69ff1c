use crate::api::models::{InfrastructureRecord, SearchResults};
use crate::domain::GeoPoint;

/// Holds the last successfully fetched result set.
///
/// The set is only ever swapped wholesale; there is no partial update or merge.
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
    records: Vec<InfrastructureRecord>,
    center: Option<GeoPoint>,
}

impl ResultStore {
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            center: None,
        }
    }

    pub fn replace(&mut self, records: Vec<InfrastructureRecord>) {
        self.records = records;
    }

    /// Replaces both the records and the server-provided center.
    pub fn replace_results(&mut self, results: SearchResults) {
        self.replace(results.records);
        self.center = results.center;
    }

    pub fn current(&self) -> &[InfrastructureRecord] {
        &self.records
    }

    pub const fn center(&self) -> Option<GeoPoint> {
        self.center
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
