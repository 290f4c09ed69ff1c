use serde::Serialize;

/// Severity tier derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    High,
    Moderate,
    Low,
}

impl Tier {
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Moderate, Self::Low];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "moderate" => Some(Self::Moderate),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }

    /// CSS-style class name used by the list badge.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Critical => "risk-critical",
            Self::High => "risk-high",
            Self::Moderate => "risk-moderate",
            Self::Low => "risk-low",
        }
    }
}

/// Sort key selected in the sidebar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Risk,
    Type,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Name, Self::Risk, Self::Type];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Risk => "risk",
            Self::Type => "type",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Name),
            1 => Some(Self::Risk),
            2 => Some(Self::Type),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "risk" => Some(Self::Risk),
            "type" => Some(Self::Type),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Risk => "Risk Score",
            Self::Type => "Type",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Risk => 1,
            Self::Type => 2,
        }
    }

    /// Next key in selector order, wrapping around.
    pub const fn next(self) -> Self {
        match Self::from_index((self.index() + 1) % Self::ALL.len()) {
            Some(key) => key,
            None => Self::Name,
        }
    }
}

/// Tier filter selected in the sidebar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    #[default]
    All,
    Only(Tier),
}

impl TierFilter {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Only(Tier::Critical),
        Self::Only(Tier::High),
        Self::Only(Tier::Moderate),
        Self::Only(Tier::Low),
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(tier) => tier.as_str(),
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::All),
            1 => Some(Self::Only(Tier::Critical)),
            2 => Some(Self::Only(Tier::High)),
            3 => Some(Self::Only(Tier::Moderate)),
            4 => Some(Self::Only(Tier::Low)),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        if value == "all" {
            return Some(Self::All);
        }
        Tier::parse(&value).map(Self::Only)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(tier) => tier.label(),
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Only(Tier::Critical) => 1,
            Self::Only(Tier::High) => 2,
            Self::Only(Tier::Moderate) => 3,
            Self::Only(Tier::Low) => 4,
        }
    }

    pub const fn next(self) -> Self {
        match Self::from_index((self.index() + 1) % Self::ALL.len()) {
            Some(filter) => filter,
            None => Self::All,
        }
    }

    pub fn admits(self, tier: Tier) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == tier,
        }
    }
}

impl Serialize for TierFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Sort and filter selections owned by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub sort_key: SortKey,
    pub filter_tier: TierFilter,
}

impl ViewState {
    pub const fn new(sort_key: SortKey, filter_tier: TierFilter) -> Self {
        Self {
            sort_key,
            filter_tier,
        }
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_cycles_through_every_option() {
        let mut key = SortKey::default();
        let mut seen = Vec::new();
        for _ in 0..SortKey::ALL.len() {
            seen.push(key);
            key = key.next();
        }
        assert_eq!(seen, SortKey::ALL.to_vec());
        assert_eq!(key, SortKey::Name);
    }

    #[test]
    fn filter_parse_accepts_all_and_tiers() {
        assert_eq!(TierFilter::parse("ALL"), Some(TierFilter::All));
        assert_eq!(
            TierFilter::parse(" moderate "),
            Some(TierFilter::Only(Tier::Moderate))
        );
        assert_eq!(TierFilter::parse("severe"), None);
    }

    #[test]
    fn filter_next_wraps_to_all() {
        assert_eq!(
            TierFilter::Only(Tier::Low).next(),
            TierFilter::All,
        );
        assert_eq!(TierFilter::All.next(), TierFilter::Only(Tier::Critical));
    }

    #[test]
    fn only_filter_admits_single_tier() {
        let filter = TierFilter::Only(Tier::High);
        assert!(filter.admits(Tier::High));
        assert!(!filter.admits(Tier::Critical));
        assert!(Tier::ALL.iter().all(|tier| TierFilter::All.admits(*tier)));
    }

    #[test]
    fn default_view_state_is_name_and_all() {
        let state = ViewState::default();
        assert_eq!(state.sort_key, SortKey::Name);
        assert_eq!(state.filter_tier, TierFilter::All);
    }
}
