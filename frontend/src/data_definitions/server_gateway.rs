//! [`DataGateway`] backed by the server functions.

use common::endpoint::Endpoint;
use common::filter_query::{DashboardQuery, FilterSet};
use common::gateway::{DataGateway, RequestError};
use common::perimeter::Perimeter;
use dioxus::prelude::ServerFnError;
use serde::Serialize;
use serde_json::Value;

use crate::api::dashboard_api;

/// Routes each [`Endpoint`] to its server function and erases the typed
/// response into JSON so the shared cache can hold every payload.
pub struct ServerGateway;

fn to_request_error(e: ServerFnError) -> RequestError {
    match e {
        ServerFnError::ServerError { message, code, .. } => {
            RequestError::http(u16::try_from(code).unwrap_or(500), message)
        }
        other => RequestError::transport(other.to_string()),
    }
}

fn encode<T: Serialize>(result: Result<T, ServerFnError>) -> Result<Value, RequestError> {
    let payload = result.map_err(to_request_error)?;
    serde_json::to_value(payload).map_err(|e| RequestError::transport(e.to_string()))
}

impl DataGateway for ServerGateway {
    async fn fetch(
        &self,
        endpoint: Endpoint,
        perimeter: Perimeter,
        filters: &FilterSet,
    ) -> Result<Value, RequestError> {
        let query = DashboardQuery::new(perimeter, filters.clone());
        match endpoint {
            Endpoint::Metrics => encode(dashboard_api::metrics(query).await),
            Endpoint::Trajectory => encode(dashboard_api::trajectory(query).await),
            Endpoint::Evolution => encode(dashboard_api::evolution(query).await),
            Endpoint::Repartition => encode(dashboard_api::repartition(query).await),
            Endpoint::TopCommunes => encode(dashboard_api::top_communes(query).await),
            Endpoint::Typologie => encode(dashboard_api::typologie(query).await),
            Endpoint::Risques => encode(dashboard_api::risques(query).await),
            Endpoint::Densification => encode(dashboard_api::densification(query).await),
            Endpoint::Benchmark => encode(dashboard_api::benchmark(query).await),
            Endpoint::Communes => encode(dashboard_api::communes(query).await),
            Endpoint::FilterOptions => encode(dashboard_api::filter_options(query).await),
            Endpoint::CommunesCoords => encode(dashboard_api::communes_coords(query).await),
            Endpoint::LastUpdate => encode(dashboard_api::last_update(query).await),
        }
    }
}
