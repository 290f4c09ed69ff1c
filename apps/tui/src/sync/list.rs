//! Sidebar surface: one entry per projected record plus the total-count label.

use crate::api::models::InfrastructureRecord;
use crate::domain::Tier;
use crate::risk::tier_for;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBadge {
    pub tier: Tier,
    pub class: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub title: String,
    pub kind: String,
    pub badge: RiskBadge,
    pub factors: Vec<FactorLine>,
}

impl ListEntry {
    pub fn for_record(record: &InfrastructureRecord) -> Self {
        let tier = tier_for(record.risk_score);
        Self {
            title: record.name.clone(),
            kind: record.kind.clone(),
            badge: RiskBadge {
                tier,
                class: tier.class_name(),
                text: format!("Risk Score: {:.2}", record.risk_score),
            },
            factors: record
                .risk_factors
                .iter()
                .map(|(name, value)| FactorLine {
                    label: display_factor_name(name),
                    value: format!("{value:.2}"),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListView {
    entries: Vec<ListEntry>,
    total_count: usize,
}

impl ListView {
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Value of the count label. Always the projected count, never the unfiltered one.
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_label(&self) -> String {
        self.total_count.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `traffic_congestion` -> `TRAFFIC CONGESTION`.
pub fn display_factor_name(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

/// Empties the container, then appends one entry per record.
pub fn render(list: &mut ListView, projection: &[InfrastructureRecord]) {
    list.entries.clear();
    list.entries
        .extend(projection.iter().map(ListEntry::for_record));
    list.total_count = projection.len();
}
