//! Per-request response cache, keyed by endpoint + perimeter + filters.

use std::collections::HashMap;

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::filter_query::FilterSet;
use crate::perimeter::Perimeter;

/// Composite cache key. The filter part is the canonical (sorted)
/// serialization, so keys are independent of selection order, and a key built
/// under an older filter state can never collide with the current one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    endpoint: Endpoint,
    perimeter: Perimeter,
    filters: String,
}

impl CacheKey {
    pub fn new(endpoint: Endpoint, perimeter: Perimeter, filters: &FilterSet) -> Self {
        Self {
            endpoint,
            perimeter,
            filters: filters.canonical_key(),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

/// Deduplicates fetches issued for one settled filter state during a single
/// render pass. No TTL and no eviction beyond [`QueryCache::clear`]: any
/// perimeter or filter mutation drops everything.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Idempotent, last write wins. Values stored under the same key are
    /// equivalent by construction, so out-of-order completion is harmless.
    pub fn put(&mut self, key: CacheKey, payload: Value) {
        self.entries.insert(key, payload);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_query::FilterDimension;
    use serde_json::json;

    #[test]
    fn get_put_roundtrip_and_clear() {
        let mut cache = QueryCache::new();
        let filters = FilterSet::new();
        let key = CacheKey::new(Endpoint::Communes, Perimeter::Scot, &filters);
        assert!(cache.get(&key).is_none());

        cache.put(key.clone(), json!({"rows": []}));
        assert_eq!(cache.get(&key), Some(&json!({"rows": []})));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn keys_embed_the_filter_state() {
        let mut cache = QueryCache::new();
        let empty = FilterSet::new();
        let mut restricted = FilterSet::new();
        restricted.toggle_value(FilterDimension::Department, "07");

        cache.put(
            CacheKey::new(Endpoint::Metrics, Perimeter::Scot, &empty),
            json!(1),
        );
        // same endpoint+perimeter, different filters: distinct entry
        assert!(cache
            .get(&CacheKey::new(Endpoint::Metrics, Perimeter::Scot, &restricted))
            .is_none());
        // same endpoint+filters, different perimeter: distinct entry
        assert!(cache
            .get(&CacheKey::new(Endpoint::Metrics, Perimeter::Ccpda, &empty))
            .is_none());
    }

    #[test]
    fn put_is_last_write_wins() {
        let mut cache = QueryCache::new();
        let key = CacheKey::new(Endpoint::Evolution, Perimeter::Scot, &FilterSet::new());
        cache.put(key.clone(), json!("first"));
        cache.put(key.clone(), json!("second"));
        assert_eq!(cache.get(&key), Some(&json!("second")));
        assert_eq!(cache.len(), 1);
    }
}
