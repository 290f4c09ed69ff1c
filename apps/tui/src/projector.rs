//! Derives the displayed sequence from the stored results and the current controls.

use crate::api::models::InfrastructureRecord;
use crate::domain::{SortKey, ViewState};
use crate::risk::tier_for;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Filters by tier, then stable-sorts by the selected key.
///
/// Returns a fresh vector; `records` is never reordered in place.
pub fn project(records: &[InfrastructureRecord], view: &ViewState) -> Vec<InfrastructureRecord> {
    let mut projection: Vec<InfrastructureRecord> = records
        .iter()
        .filter(|record| view.filter_tier.admits(tier_for(record.risk_score)))
        .cloned()
        .collect();

    // `sort_by` is stable; ties keep their input order.
    match view.sort_key {
        SortKey::Name => projection.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::Risk => projection.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score)),
        SortKey::Type => projection.sort_by(|a, b| locale_cmp(&a.kind, &b.kind)),
    }

    projection
}

/// Human-oriented string ordering.
///
/// Compares on base letters first, ignoring case and accents, so "École"
/// sorts among the E's. Ties are broken by accents (unaccented first), then by
/// case (lowercase first). Strings that are byte-identical compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| b.cmp(a))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tier, TierFilter};
    use std::collections::BTreeMap;

    fn record(name: &str, kind: &str, risk_score: f64) -> InfrastructureRecord {
        InfrastructureRecord {
            id: None,
            name: name.to_string(),
            kind: kind.to_string(),
            latitude: 38.9,
            longitude: -77.0,
            risk_score,
            risk_factors: BTreeMap::new(),
        }
    }

    fn names(records: &[InfrastructureRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<InfrastructureRecord> {
        vec![
            record("Union Station", "railway_station", 0.35),
            record("bridge st", "road", 0.62),
            record("Arlington Bridge", "bridge", 0.83),
            record("Canal Road", "road", 0.62),
            record("Metro Center", "railway_station", 0.4),
        ]
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let view = ViewState::new(SortKey::Name, TierFilter::All);
        assert_eq!(
            names(&project(&sample(), &view)),
            ["Arlington Bridge", "bridge st", "Canal Road", "Metro Center", "Union Station"]
        );
    }

    #[test]
    fn risk_sort_is_non_increasing_and_stable() {
        let view = ViewState::new(SortKey::Risk, TierFilter::All);
        let projection = project(&sample(), &view);

        assert!(projection
            .windows(2)
            .all(|pair| pair[0].risk_score >= pair[1].risk_score));
        // Equal scores keep input order.
        assert_eq!(names(&projection)[1..3], ["bridge st", "Canal Road"]);
    }

    #[test]
    fn type_sort_keeps_input_order_within_a_type() {
        let view = ViewState::new(SortKey::Type, TierFilter::All);
        assert_eq!(
            names(&project(&sample(), &view)),
            ["Arlington Bridge", "Union Station", "Metro Center", "bridge st", "Canal Road"]
        );
    }

    #[test]
    fn resorting_sorted_input_is_a_no_op() {
        let view = ViewState::new(SortKey::Name, TierFilter::All);
        let once = project(&sample(), &view);
        let twice = project(&once, &view);
        assert_eq!(once, twice);
    }

    #[test]
    fn projection_is_idempotent_and_leaves_input_alone() {
        let input = sample();
        let view = ViewState::new(SortKey::Risk, TierFilter::Only(Tier::High));
        assert_eq!(project(&input, &view), project(&input, &view));
        assert_eq!(input, sample());
    }

    #[test]
    fn filter_is_exclusive() {
        let input = sample();
        let view = ViewState::new(SortKey::Name, TierFilter::Only(Tier::Critical));
        let projection = project(&input, &view);
        assert_eq!(names(&projection), ["Arlington Bridge"]);
        assert!(projection
            .iter()
            .all(|r| tier_for(r.risk_score) == Tier::Critical));
    }

    #[test]
    fn all_filter_preserves_count() {
        let input = sample();
        let view = ViewState::new(SortKey::Type, TierFilter::All);
        assert_eq!(project(&input, &view).len(), input.len());
    }

    #[test]
    fn filter_without_matches_yields_empty() {
        let input = vec![record("A", "road", 0.1)];
        let view = ViewState::new(SortKey::Name, TierFilter::Only(Tier::Critical));
        assert!(project(&input, &view).is_empty());
    }

    #[test]
    fn duplicate_names_are_both_kept() {
        let input = vec![record("Station", "railway_station", 0.2), record("Station", "road", 0.9)];
        let view = ViewState::new(SortKey::Name, TierFilter::All);
        let projection = project(&input, &view);
        assert_eq!(projection.len(), 2);
        assert_eq!(projection[0].kind, "railway_station");
    }

    #[test]
    fn locale_cmp_orders_lowercase_first_on_case_ties() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let input = vec![
            record("Zoo Bridge", "bridge", 0.5),
            record("École Street", "road", 0.5),
            record("Avenue", "road", 0.5),
        ];
        let view = ViewState::new(SortKey::Name, TierFilter::All);
        assert_eq!(
            names(&project(&input, &view)),
            ["Avenue", "École Street", "Zoo Bridge"]
        );
        assert_eq!(locale_cmp("École", "Zoo"), Ordering::Less);
    }

    #[test]
    fn accents_and_case_only_break_ties() {
        assert_eq!(locale_cmp("ecole", "école"), Ordering::Less);
        assert_eq!(locale_cmp("école", "Ecole"), Ordering::Greater);
        assert_eq!(locale_cmp("école", "ecolf"), Ordering::Less);
        assert_eq!(locale_cmp("Ñandú", "ñandú"), Ordering::Greater);
        assert_eq!(locale_cmp("café", "café"), Ordering::Equal);
    }
}
