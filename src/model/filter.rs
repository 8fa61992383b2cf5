//! Property Filtering
//!
//! The search predicate behind the properties page: a conjunction of
//! independent per-field checks over the listing set, re-evaluated on
//! every keystroke. Fields hold the raw input strings; an empty or
//! unparseable field imposes no constraint rather than raising an error.

use super::Property;

/// Filter state as typed into the properties page controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyFilter {
    /// Free-text query matched against address and neighborhood.
    pub search: String,
    /// Exact neighborhood name, or empty for all.
    pub neighborhood: String,
    pub min_price: String,
    pub max_price: String,
    /// Exact bedroom count, or empty for any.
    pub bedrooms: String,
    /// Exact property-type label, or empty for all.
    pub property_type: String,
}

impl PropertyFilter {
    /// True when the listing satisfies every provided constraint.
    pub fn matches(&self, property: &Property) -> bool {
        let query = self.search.to_lowercase();
        let matches_search = query.is_empty()
            || property.address.to_lowercase().contains(&query)
            || property.neighborhood.to_lowercase().contains(&query);

        let matches_neighborhood =
            self.neighborhood.is_empty() || property.neighborhood == self.neighborhood;

        let matches_min = match parse_bound(&self.min_price) {
            Some(min) => property.price >= min,
            None => true,
        };
        let matches_max = match parse_bound(&self.max_price) {
            Some(max) => property.price <= max,
            None => true,
        };
        let matches_bedrooms = match parse_bound(&self.bedrooms) {
            Some(count) => property.bedrooms == count,
            None => true,
        };

        let matches_type = self.property_type.is_empty()
            || property.property_type.as_str() == self.property_type;

        matches_search
            && matches_neighborhood
            && matches_min
            && matches_max
            && matches_bedrooms
            && matches_type
    }
}

/// Lenient numeric parse: empty or malformed input means "no constraint".
fn parse_bound(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    fn count(filter: &PropertyFilter) -> usize {
        seed::properties()
            .iter()
            .filter(|p| filter.matches(p))
            .count()
    }

    #[test]
    fn empty_filter_is_a_wildcard() {
        assert_eq!(count(&PropertyFilter::default()), seed::properties().len());
    }

    #[test]
    fn search_matches_address_and_neighborhood_case_insensitively() {
        let mut filter = PropertyFilter {
            search: "BEACON".into(),
            ..Default::default()
        };
        // "456 Beacon St, Beacon Hill" only
        assert_eq!(count(&filter), 1);

        filter.search = "back bay".into();
        assert_eq!(count(&filter), 1);

        filter.search = "springfield".into();
        assert_eq!(count(&filter), 0);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filter = PropertyFilter {
            min_price: "850000".into(),
            max_price: "850000".into(),
            ..Default::default()
        };
        assert_eq!(count(&filter), 1);
    }

    #[test]
    fn malformed_numbers_impose_no_constraint() {
        let filter = PropertyFilter {
            min_price: "not a number".into(),
            max_price: "  ".into(),
            bedrooms: "3x".into(),
            ..Default::default()
        };
        assert_eq!(count(&filter), seed::properties().len());
    }

    #[test]
    fn constraints_combine_as_a_conjunction() {
        let filter = PropertyFilter {
            search: "beacon".into(),
            bedrooms: "3".into(),
            ..Default::default()
        };
        // "Beacon" matches one listing, but that listing has 4 bedrooms.
        assert_eq!(count(&filter), 0);
    }

    #[test]
    fn relaxing_a_constraint_never_shrinks_the_result_set() {
        let full = PropertyFilter {
            search: "beacon".into(),
            neighborhood: "Beacon Hill".into(),
            min_price: "1000000".into(),
            max_price: "2000000".into(),
            bedrooms: "4".into(),
            property_type: "Townhouse".into(),
        };
        let baseline = count(&full);

        let relaxations = [
            PropertyFilter { search: String::new(), ..full.clone() },
            PropertyFilter { neighborhood: String::new(), ..full.clone() },
            PropertyFilter { min_price: String::new(), ..full.clone() },
            PropertyFilter { max_price: String::new(), ..full.clone() },
            PropertyFilter { bedrooms: String::new(), ..full.clone() },
            PropertyFilter { property_type: String::new(), ..full.clone() },
        ];
        for relaxed in relaxations {
            assert!(count(&relaxed) >= baseline);
        }
    }
}
