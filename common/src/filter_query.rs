//! Filter dimensions, the multi-select filter state and its query encoding.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::perimeter::Perimeter;

/// One independently toggleable filter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    Department,
    Commune,
    Typology,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Department,
        FilterDimension::Commune,
        FilterDimension::Typology,
    ];

    /// Query parameter name carried on the wire (repeated, zero or more).
    pub fn param_name(self) -> &'static str {
        match self {
            FilterDimension::Department => "departements",
            FilterDimension::Commune => "communes",
            FilterDimension::Typology => "typologies",
        }
    }

    /// Dimensions whose option catalog must be refetched when this one's
    /// selection changes. Only communes depend on the department selection;
    /// departments and typologies depend on the perimeter alone.
    pub fn dependents(self) -> &'static [FilterDimension] {
        match self {
            FilterDimension::Department => &[FilterDimension::Commune],
            FilterDimension::Commune | FilterDimension::Typology => &[],
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FilterDimension::Department => "Départements",
            FilterDimension::Commune => "Communes",
            FilterDimension::Typology => "Typologies",
        }
    }
}

/// What the user clicked in a dropdown: the "Tous" sentinel row or a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChoice {
    All,
    Value(String),
}

/// Selected options per dimension. An absent (or empty) entry means "no
/// restriction" for that dimension, i.e. the "select all" sentinel state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSet {
    selections: BTreeMap<FilterDimension, BTreeSet<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the dimension carries no restriction (sentinel state).
    pub fn is_unrestricted(&self, dimension: FilterDimension) -> bool {
        self.selections
            .get(&dimension)
            .map(|set| set.is_empty())
            .unwrap_or(true)
    }

    pub fn is_selected(&self, dimension: FilterDimension, value: &str) -> bool {
        self.selections
            .get(&dimension)
            .map(|set| set.contains(value))
            .unwrap_or(false)
    }

    pub fn selected(&self, dimension: FilterDimension) -> BTreeSet<String> {
        self.selections.get(&dimension).cloned().unwrap_or_default()
    }

    /// True when the dimension either carries no restriction or contains the
    /// value. This is the querying interpretation of the sentinel.
    pub fn matches(&self, dimension: FilterDimension, value: &str) -> bool {
        self.is_unrestricted(dimension) || self.is_selected(dimension, value)
    }

    /// Adds or removes one concrete value. Drained sets drop their map entry
    /// so a fully deselected dimension is indistinguishable from the sentinel.
    pub fn toggle_value(&mut self, dimension: FilterDimension, value: &str) {
        let entry = self.selections.entry(dimension).or_insert_with(BTreeSet::new);
        if !entry.remove(value) {
            entry.insert(value.to_string());
        }
        if entry.is_empty() {
            self.selections.remove(&dimension);
        }
    }

    pub fn clear_dimension(&mut self, dimension: FilterDimension) {
        self.selections.remove(&dimension);
    }

    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    /// Intersects the dimension's selection with the refreshed catalog.
    /// Returns true when stale values were pruned. The only place selections
    /// are altered by the system rather than by a direct user action.
    pub fn retain_valid(&mut self, dimension: FilterDimension, catalog: &[String]) -> bool {
        let Some(set) = self.selections.get_mut(&dimension) else {
            return false;
        };
        let before = set.len();
        set.retain(|value| catalog.iter().any(|option| option == value));
        let changed = set.len() != before;
        if set.is_empty() {
            self.selections.remove(&dimension);
        }
        changed
    }

    /// Canonical, order-independent serialization used in cache keys.
    /// BTree iteration already sorts dimensions and values.
    pub fn canonical_key(&self) -> String {
        let mut parts = Vec::new();
        for (dimension, values) in &self.selections {
            if values.is_empty() {
                continue;
            }
            let joined = values.iter().cloned().collect::<Vec<_>>().join(",");
            parts.push(format!("{}={}", dimension.param_name(), joined));
        }
        parts.join("&")
    }

    /// Repeated query parameters, one pair per selected value.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (dimension, values) in &self.selections {
            for value in values {
                pairs.push((dimension.param_name(), value.clone()));
            }
        }
        pairs
    }
}

/// Typed request parameters carried by every data fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardQuery {
    pub perimeter: Perimeter,
    pub filters: FilterSet,
}

impl DashboardQuery {
    pub fn new(perimeter: Perimeter, filters: FilterSet) -> Self {
        Self { perimeter, filters }
    }

    /// Full parameter list for URL-encoded routes (perimetre first, then the
    /// repeated filter parameters).
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("perimetre", self.perimeter.as_str().to_string())];
        pairs.extend(self.filters.query_pairs());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_the_sentinel() {
        let filters = FilterSet::new();
        assert!(filters.is_unrestricted(FilterDimension::Department));
        assert!(filters.matches(FilterDimension::Department, "26"));
    }

    #[test]
    fn toggle_value_in_and_out_restores_sentinel() {
        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Department, "07");
        assert!(!filters.is_unrestricted(FilterDimension::Department));
        assert!(filters.matches(FilterDimension::Department, "07"));
        assert!(!filters.matches(FilterDimension::Department, "26"));

        filters.toggle_value(FilterDimension::Department, "07");
        assert!(filters.is_unrestricted(FilterDimension::Department));
        assert_eq!(filters.canonical_key(), "");
    }

    #[test]
    fn canonical_key_is_order_independent() {
        let mut a = FilterSet::new();
        a.toggle_value(FilterDimension::Department, "26");
        a.toggle_value(FilterDimension::Department, "07");
        a.toggle_value(FilterDimension::Commune, "Anneyron");

        let mut b = FilterSet::new();
        b.toggle_value(FilterDimension::Commune, "Anneyron");
        b.toggle_value(FilterDimension::Department, "07");
        b.toggle_value(FilterDimension::Department, "26");

        assert_eq!(a.canonical_key(), b.canonical_key());
        assert_eq!(a.canonical_key(), "departements=07,26&communes=Anneyron");
    }

    #[test]
    fn retain_valid_prunes_stale_selections() {
        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Commune, "Lyon");
        filters.toggle_value(FilterDimension::Commune, "Anneyron");

        let catalog = vec!["Anneyron".to_string(), "Albon".to_string()];
        assert!(filters.retain_valid(FilterDimension::Commune, &catalog));
        assert_eq!(
            filters.selected(FilterDimension::Commune).into_iter().collect::<Vec<_>>(),
            vec!["Anneyron".to_string()]
        );

        // second pass with the same catalog changes nothing
        assert!(!filters.retain_valid(FilterDimension::Commune, &catalog));
    }

    #[test]
    fn query_pairs_repeat_parameters() {
        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Department, "07");
        filters.toggle_value(FilterDimension::Department, "26");
        let query = DashboardQuery::new(Perimeter::Scot, filters);
        assert_eq!(
            query.query_pairs(),
            vec![
                ("perimetre", "scot".to_string()),
                ("departements", "07".to_string()),
                ("departements", "26".to_string()),
            ]
        );
    }
}
