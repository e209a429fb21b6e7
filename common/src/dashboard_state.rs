//! The synchronous filter/cache state machine behind the dashboard.

use serde_json::Value;

use crate::catalog::OptionCatalog;
use crate::endpoint::Endpoint;
use crate::filter_query::{FilterChoice, FilterDimension, FilterSet};
use crate::perimeter::Perimeter;
use crate::query_cache::{CacheKey, QueryCache};

/// What a mutation asks its caller to do next. The catalog refreshes listed
/// here must run before the reload so dependent dropdowns are never stale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationEffect {
    pub reload_needed: bool,
    pub catalogs_to_refresh: Vec<FilterDimension>,
}

impl MutationEffect {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Single source of truth for the perimeter, the filter selection, the option
/// catalog and the response cache. All mutations run through here so the
/// invalidation order (mutate, then clear the cache, then refresh dependents)
/// is auditable.
///
/// The epoch counter increments on every invalidation; async callers compare
/// it across an await to discard results that completed under a state the UI
/// has since moved past.
#[derive(Debug, Default)]
pub struct DashboardState {
    perimeter: Perimeter,
    filters: FilterSet,
    catalog: OptionCatalog,
    cache: QueryCache,
    epoch: u64,
}

impl DashboardState {
    pub fn new(perimeter: Perimeter) -> Self {
        Self {
            perimeter,
            ..Self::default()
        }
    }

    pub fn perimeter(&self) -> Perimeter {
        self.perimeter
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn invalidate(&mut self) {
        self.cache.clear();
        self.epoch += 1;
    }

    /// Applies one dropdown click.
    ///
    /// Selecting the "Tous" sentinel clears the dimension (meaning "all");
    /// clicking it while the set is already empty is ignored, so the sentinel
    /// can never be deselected into "nothing". Toggling a concrete value adds
    /// or removes it; a set that grows to equal the whole catalog is left as
    /// an explicit full set, query-equivalent to the sentinel but visually
    /// distinct.
    pub fn toggle_option(&mut self, dimension: FilterDimension, choice: FilterChoice) -> MutationEffect {
        match choice {
            FilterChoice::All => {
                if self.filters.is_unrestricted(dimension) {
                    return MutationEffect::none();
                }
                self.filters.clear_dimension(dimension);
            }
            FilterChoice::Value(value) => {
                self.filters.toggle_value(dimension, &value);
            }
        }
        self.invalidate();
        MutationEffect {
            reload_needed: true,
            catalogs_to_refresh: dimension.dependents().to_vec(),
        }
    }

    /// Replaces the perimeter, resetting the whole filter state.
    pub fn set_perimeter(&mut self, perimeter: Perimeter) -> MutationEffect {
        if perimeter == self.perimeter {
            return MutationEffect::none();
        }
        self.perimeter = perimeter;
        self.filters.clear_all();
        self.invalidate();
        MutationEffect {
            reload_needed: true,
            catalogs_to_refresh: FilterDimension::ALL.to_vec(),
        }
    }

    /// Installs a freshly fetched option list and prunes selections that are
    /// no longer valid. Returns true when the pruning changed the selection,
    /// in which case the cache was cleared and a reload is due even though no
    /// explicit toggle happened.
    pub fn apply_catalog(&mut self, dimension: FilterDimension, options: Vec<String>) -> bool {
        self.catalog.replace(dimension, options);
        let pruned = self.filters.retain_valid(dimension, self.catalog.options(dimension));
        if pruned {
            self.invalidate();
        }
        pruned
    }

    /// Key for the given endpoint under the current perimeter and filters.
    pub fn cache_key(&self, endpoint: Endpoint) -> CacheKey {
        CacheKey::new(endpoint, self.perimeter, &self.filters)
    }

    pub fn cached(&self, key: &CacheKey) -> Option<&Value> {
        self.cache.get(key)
    }

    pub fn store(&mut self, key: CacheKey, payload: Value) {
        self.cache.put(key, payload);
    }
}
