//! Signals the dashboard coroutine writes and the components read.

use common::catalog::OptionCatalog;
use common::chart_data::{
    BenchmarkRow, DensificationData, EvolutionData, RepartitionData, RisquesData, TopCommuneRow,
    TypologieRow,
};
use common::commune::{CommuneCoords, CommuneRow, LastUpdate};
use common::endpoint::Endpoint;
use common::filter_query::FilterSet;
use common::gateway::{CatalogRefreshError, RequestError};
use common::metrics::{Metrics, TrajectoryData};
use common::perimeter::Perimeter;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `None` while a load is in flight, then the decoded payload or the error.
pub type Payload<T> = Option<Result<T, RequestError>>;

/// One signal per endpoint payload plus mirrors of the filter state. The
/// coroutine is the only writer; components subscribe to the slices they
/// render.
#[derive(Clone, Copy)]
pub struct DashboardViewState {
    pub perimeter: Signal<Perimeter>,
    pub filters: Signal<FilterSet>,
    pub catalog: Signal<OptionCatalog>,
    pub catalog_error: Signal<Option<CatalogRefreshError>>,

    pub metrics: Signal<Payload<Metrics>>,
    pub trajectory: Signal<Payload<TrajectoryData>>,
    pub evolution: Signal<Payload<EvolutionData>>,
    pub repartition: Signal<Payload<RepartitionData>>,
    pub top_communes: Signal<Payload<Vec<TopCommuneRow>>>,
    pub typologie: Signal<Payload<Vec<TypologieRow>>>,
    pub risques: Signal<Payload<RisquesData>>,
    pub densification: Signal<Payload<DensificationData>>,
    pub benchmark: Signal<Payload<Vec<BenchmarkRow>>>,
    pub communes: Signal<Payload<Vec<CommuneRow>>>,
    pub communes_coords: Signal<Payload<Vec<CommuneCoords>>>,
    pub last_update: Signal<Payload<LastUpdate>>,
}

fn decode<T: DeserializeOwned + 'static>(
    mut slot: Signal<Payload<T>>,
    result: Result<Value, RequestError>,
) {
    let decoded = result.and_then(|value| {
        serde_json::from_value(value)
            .map_err(|e| RequestError::transport(format!("malformed payload: {e}")))
    });
    slot.set(Some(decoded));
}

impl DashboardViewState {
    pub fn new() -> Self {
        Self {
            perimeter: Signal::new(Perimeter::default()),
            filters: Signal::new(FilterSet::new()),
            catalog: Signal::new(OptionCatalog::new()),
            catalog_error: Signal::new(None),
            metrics: Signal::new(None),
            trajectory: Signal::new(None),
            evolution: Signal::new(None),
            repartition: Signal::new(None),
            top_communes: Signal::new(None),
            typologie: Signal::new(None),
            risques: Signal::new(None),
            densification: Signal::new(None),
            benchmark: Signal::new(None),
            communes: Signal::new(None),
            communes_coords: Signal::new(None),
            last_update: Signal::new(None),
        }
    }

    /// Puts every endpoint slot back to the loading state.
    pub fn clear_payloads(&mut self) {
        self.metrics.set(None);
        self.trajectory.set(None);
        self.evolution.set(None);
        self.repartition.set(None);
        self.top_communes.set(None);
        self.typologie.set(None);
        self.risques.set(None);
        self.densification.set(None);
        self.benchmark.set(None);
        self.communes.set(None);
        self.communes_coords.set(None);
        self.last_update.set(None);
    }

    /// Decodes one fetched payload into its typed slot.
    pub fn set_payload(&mut self, endpoint: Endpoint, result: Result<Value, RequestError>) {
        match endpoint {
            Endpoint::Metrics => decode(self.metrics, result),
            Endpoint::Trajectory => decode(self.trajectory, result),
            Endpoint::Evolution => decode(self.evolution, result),
            Endpoint::Repartition => decode(self.repartition, result),
            Endpoint::TopCommunes => decode(self.top_communes, result),
            Endpoint::Typologie => decode(self.typologie, result),
            Endpoint::Risques => decode(self.risques, result),
            Endpoint::Densification => decode(self.densification, result),
            Endpoint::Benchmark => decode(self.benchmark, result),
            Endpoint::Communes => decode(self.communes, result),
            Endpoint::CommunesCoords => decode(self.communes_coords, result),
            Endpoint::LastUpdate => decode(self.last_update, result),
            // the catalog is mirrored through sync_filters, not cached payloads
            Endpoint::FilterOptions => {}
        }
    }

    /// Mirrors the controller's filter state into the signals after a
    /// mutation settles.
    pub fn sync_filters(&mut self, perimeter: Perimeter, filters: &FilterSet, catalog: &OptionCatalog) {
        self.perimeter.set(perimeter);
        self.filters.set(filters.clone());
        self.catalog.set(catalog.clone());
    }
}
