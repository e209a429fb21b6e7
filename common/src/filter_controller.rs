//! Async orchestration over the dashboard state machine.

use serde_json::Value;

use crate::catalog::FilterOptions;
use crate::dashboard_state::{DashboardState, MutationEffect};
use crate::endpoint::Endpoint;
use crate::filter_query::{FilterChoice, FilterDimension};
use crate::gateway::{CatalogRefreshError, DataGateway, RequestError};
use crate::perimeter::Perimeter;

/// Owns the [`DashboardState`] and a [`DataGateway`] and sequences the side
/// effects of each user action: mutate the filter state, clear the cache,
/// refetch dependent catalogs, then let the caller reload data.
///
/// One instance per session; the view layer drives it from a single task so
/// mutations are serialized.
pub struct FilterController<G> {
    state: DashboardState,
    gateway: G,
}

impl<G: DataGateway> FilterController<G> {
    pub fn new(gateway: G, perimeter: Perimeter) -> Self {
        Self {
            state: DashboardState::new(perimeter),
            gateway,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn perimeter(&self) -> Perimeter {
        self.state.perimeter()
    }

    pub fn epoch(&self) -> u64 {
        self.state.epoch()
    }

    /// Applies a dropdown click and refreshes whatever catalogs depend on the
    /// toggled dimension. For a department toggle the order is: update the
    /// selection, clear the cache, refetch the commune catalog (pruning stale
    /// communes), and only then report that a reload is needed — the commune
    /// catalog is stale the instant the department changes.
    pub async fn toggle_option(
        &mut self,
        dimension: FilterDimension,
        choice: FilterChoice,
    ) -> Result<MutationEffect, CatalogRefreshError> {
        let effect = self.state.toggle_option(dimension, choice);
        for dependent in &effect.catalogs_to_refresh {
            self.refresh_catalog(*dependent).await?;
        }
        Ok(effect)
    }

    /// Replaces the perimeter and reloads all three catalogs.
    pub async fn set_perimeter(
        &mut self,
        perimeter: Perimeter,
    ) -> Result<MutationEffect, CatalogRefreshError> {
        let effect = self.state.set_perimeter(perimeter);
        if !effect.catalogs_to_refresh.is_empty() {
            self.refresh_all_catalogs().await?;
        }
        Ok(effect)
    }

    /// Refetches the option list for one dimension under the current
    /// perimeter and filters, then prunes the selection against it. Returns
    /// true when pruning changed the selection (the cache was cleared and a
    /// reload is due).
    ///
    /// The fetch happens before any state is touched: a failed refresh leaves
    /// the previous catalog, selection and cache exactly as they were.
    pub async fn refresh_catalog(
        &mut self,
        dimension: FilterDimension,
    ) -> Result<bool, CatalogRefreshError> {
        let options = self.fetch_options(dimension).await?;
        Ok(self
            .state
            .apply_catalog(dimension, options.for_dimension(dimension).to_vec()))
    }

    /// One `filter-options` fetch applied to all three dimensions (the
    /// perimeter-change path).
    pub async fn refresh_all_catalogs(&mut self) -> Result<bool, CatalogRefreshError> {
        let options = self.fetch_options(FilterDimension::Department).await?;
        let mut pruned = false;
        for dimension in FilterDimension::ALL {
            pruned |= self
                .state
                .apply_catalog(dimension, options.for_dimension(dimension).to_vec());
        }
        Ok(pruned)
    }

    async fn fetch_options(
        &self,
        dimension: FilterDimension,
    ) -> Result<FilterOptions, CatalogRefreshError> {
        let payload = self
            .gateway
            .fetch(Endpoint::FilterOptions, self.state.perimeter(), self.state.filters())
            .await
            .map_err(|source| CatalogRefreshError { dimension, source })?;
        serde_json::from_value(payload).map_err(|err| CatalogRefreshError {
            dimension,
            source: RequestError::transport(format!("malformed filter-options payload: {err}")),
        })
    }

    /// Cache-first fetch for one endpoint. The result is stored only when the
    /// epoch is unchanged after the await, so a completion racing a filter
    /// mutation can never repopulate the cleared cache.
    pub async fn load(&mut self, endpoint: Endpoint) -> Result<Value, RequestError> {
        let key = self.state.cache_key(endpoint);
        if let Some(hit) = self.state.cached(&key) {
            return Ok(hit.clone());
        }
        let epoch = self.state.epoch();
        let payload = self
            .gateway
            .fetch(endpoint, self.state.perimeter(), self.state.filters())
            .await?;
        if self.state.epoch() == epoch {
            self.state.store(key, payload.clone());
        }
        Ok(payload)
    }

    /// Concurrent fetches for distinct endpoints. Each result is independent;
    /// a failure in one does not abort its siblings. Cache hits are answered
    /// without a network call, misses are issued together.
    pub async fn load_batch(
        &mut self,
        endpoints: &[Endpoint],
    ) -> Vec<(Endpoint, Result<Value, RequestError>)> {
        let mut results = Vec::with_capacity(endpoints.len());
        let mut misses = Vec::new();
        for &endpoint in endpoints {
            let key = self.state.cache_key(endpoint);
            match self.state.cached(&key) {
                Some(hit) => results.push((endpoint, Ok(hit.clone()))),
                None => misses.push((endpoint, key)),
            }
        }

        let epoch = self.state.epoch();
        let perimeter = self.state.perimeter();
        let filters = self.state.filters().clone();
        let gateway = &self.gateway;
        let fetched = futures_util::future::join_all(
            misses
                .iter()
                .map(|(endpoint, _)| gateway.fetch(*endpoint, perimeter, &filters)),
        )
        .await;

        for ((endpoint, key), result) in misses.into_iter().zip(fetched) {
            if let Ok(payload) = &result {
                if self.state.epoch() == epoch {
                    self.state.store(key, payload.clone());
                }
            }
            results.push((endpoint, result));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_query::FilterSet;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Gateway that serves canned payloads and counts every fetch. The
    /// commune option list is scoped to the department selection the way the
    /// real server scopes it.
    #[derive(Clone, Default)]
    struct MockGateway {
        calls: Rc<RefCell<Vec<(Endpoint, Perimeter, String)>>>,
        fail_filter_options: Rc<RefCell<bool>>,
    }

    impl MockGateway {
        fn new() -> Self {
            Self::default()
        }

        fn calls_for(&self, endpoint: Endpoint) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|(e, _, _)| *e == endpoint)
                .count()
        }

        fn options_for(filters: &FilterSet) -> Value {
            let departments = filters.selected(FilterDimension::Department);
            let communes: Vec<&str> = if departments.is_empty() {
                vec!["Albon", "Anneyron", "Lyon"]
            } else if departments.contains("01") {
                vec!["Albon", "Anneyron"]
            } else {
                vec!["Lyon"]
            };
            json!({
                "departements": ["01", "02"],
                "communes": communes,
                "typologies": ["Pôles principaux", "Hors attraction (rural)"],
            })
        }
    }

    impl DataGateway for MockGateway {
        async fn fetch(
            &self,
            endpoint: Endpoint,
            perimeter: Perimeter,
            filters: &FilterSet,
        ) -> Result<Value, RequestError> {
            self.calls
                .borrow_mut()
                .push((endpoint, perimeter, filters.canonical_key()));
            match endpoint {
                Endpoint::FilterOptions => {
                    if *self.fail_filter_options.borrow() {
                        return Err(RequestError::http(502, "upstream down"));
                    }
                    Ok(Self::options_for(filters))
                }
                other => Ok(json!({"endpoint": other.name(), "filters": filters.canonical_key()})),
            }
        }
    }

    #[tokio::test]
    async fn department_toggle_refreshes_the_commune_catalog_once() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway.clone(), Perimeter::Scot);
        controller.refresh_all_catalogs().await.unwrap();
        let options_before = gateway.calls_for(Endpoint::FilterOptions);

        let effect = controller
            .toggle_option(FilterDimension::Department, FilterChoice::Value("01".into()))
            .await
            .unwrap();
        assert!(effect.reload_needed);
        assert_eq!(gateway.calls_for(Endpoint::FilterOptions), options_before + 1);

        // commune list is now scoped to department 01
        assert_eq!(
            controller.state().catalog().options(FilterDimension::Commune),
            &["Albon".to_string(), "Anneyron".to_string()]
        );
    }

    #[tokio::test]
    async fn stale_commune_selection_is_pruned_on_department_change() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway, Perimeter::Scot);
        controller.refresh_all_catalogs().await.unwrap();

        // "Lyon" is only valid when department 02 (or none) is selected
        controller
            .toggle_option(FilterDimension::Commune, FilterChoice::Value("Lyon".into()))
            .await
            .unwrap();
        controller
            .toggle_option(FilterDimension::Department, FilterChoice::Value("01".into()))
            .await
            .unwrap();

        assert!(controller.state().filters().is_unrestricted(FilterDimension::Commune));
        for value in controller.state().filters().selected(FilterDimension::Commune) {
            assert!(
                controller
                    .state()
                    .catalog()
                    .options(FilterDimension::Commune)
                    .contains(&value)
            );
        }
    }

    #[tokio::test]
    async fn refresh_catalog_is_idempotent() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway, Perimeter::Scot);
        controller.refresh_all_catalogs().await.unwrap();
        controller
            .toggle_option(FilterDimension::Commune, FilterChoice::Value("Albon".into()))
            .await
            .unwrap();

        controller.refresh_catalog(FilterDimension::Commune).await.unwrap();
        let first = controller.state().filters().selected(FilterDimension::Commune);
        controller.refresh_catalog(FilterDimension::Commune).await.unwrap();
        let second = controller.state().filters().selected(FilterDimension::Commune);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn failed_catalog_refresh_leaves_prior_state_intact() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway.clone(), Perimeter::Scot);
        controller.refresh_all_catalogs().await.unwrap();
        controller
            .toggle_option(FilterDimension::Commune, FilterChoice::Value("Lyon".into()))
            .await
            .unwrap();
        controller.load(Endpoint::Metrics).await.unwrap();
        assert_eq!(controller.state().cache_len(), 1);

        *gateway.fail_filter_options.borrow_mut() = true;
        let err = controller
            .refresh_catalog(FilterDimension::Commune)
            .await
            .unwrap_err();
        assert_eq!(err.dimension, FilterDimension::Commune);
        assert_eq!(err.source.status, Some(502));

        // catalog, selection and cache untouched by the failed refresh
        assert!(controller.state().filters().is_selected(FilterDimension::Commune, "Lyon"));
        assert_eq!(controller.state().cache_len(), 1);
    }

    #[tokio::test]
    async fn load_hits_the_cache_for_an_unchanged_state() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway.clone(), Perimeter::Scot);

        let first = controller.load(Endpoint::Communes).await.unwrap();
        let second = controller.load(Endpoint::Communes).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(gateway.calls_for(Endpoint::Communes), 1);
    }

    #[tokio::test]
    async fn mutation_invalidates_the_cache_before_the_next_load() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway.clone(), Perimeter::Scot);
        controller.load(Endpoint::Communes).await.unwrap();

        controller
            .toggle_option(FilterDimension::Typology, FilterChoice::Value("Autre".into()))
            .await
            .unwrap();
        assert_eq!(controller.state().cache_len(), 0);

        controller.load(Endpoint::Communes).await.unwrap();
        assert_eq!(gateway.calls_for(Endpoint::Communes), 2);
    }

    #[tokio::test]
    async fn perimeter_switch_resets_filters_and_reloads_catalogs() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway.clone(), Perimeter::Scot);
        controller.refresh_all_catalogs().await.unwrap();
        controller
            .toggle_option(FilterDimension::Department, FilterChoice::Value("01".into()))
            .await
            .unwrap();
        controller.load(Endpoint::Metrics).await.unwrap();

        let effect = controller.set_perimeter(Perimeter::Ccpda).await.unwrap();
        assert!(effect.reload_needed);
        assert!(controller.state().filters().is_unrestricted(FilterDimension::Department));
        assert_eq!(controller.state().cache_len(), 0);
        for dimension in FilterDimension::ALL {
            assert!(!controller.state().catalog().options(dimension).is_empty());
        }
        // fetches under the new perimeter carry it
        let calls = gateway.calls.borrow();
        assert_eq!(calls.last().unwrap().1, Perimeter::Ccpda);
    }

    #[tokio::test]
    async fn batch_failures_do_not_abort_siblings() {
        // filter-options fetched through load_batch fails, the rest succeed
        let gateway = MockGateway::new();
        *gateway.fail_filter_options.borrow_mut() = true;
        let mut controller = FilterController::new(gateway, Perimeter::Scot);

        let results = controller
            .load_batch(&[Endpoint::Evolution, Endpoint::FilterOptions, Endpoint::Repartition])
            .await;
        assert_eq!(results.len(), 3);
        let by_endpoint: HashMap<_, _> = results
            .into_iter()
            .map(|(endpoint, result)| (endpoint, result.is_ok()))
            .collect();
        assert_eq!(by_endpoint[&Endpoint::Evolution], true);
        assert_eq!(by_endpoint[&Endpoint::FilterOptions], false);
        assert_eq!(by_endpoint[&Endpoint::Repartition], true);
    }

    #[tokio::test]
    async fn batch_serves_cache_hits_without_refetching() {
        let gateway = MockGateway::new();
        let mut controller = FilterController::new(gateway.clone(), Perimeter::Scot);
        controller.load(Endpoint::Evolution).await.unwrap();

        controller
            .load_batch(&[Endpoint::Evolution, Endpoint::Repartition])
            .await;
        assert_eq!(gateway.calls_for(Endpoint::Evolution), 1);
        assert_eq!(gateway.calls_for(Endpoint::Repartition), 1);
    }
}
