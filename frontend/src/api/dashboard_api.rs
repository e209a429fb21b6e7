//! Client API calls for the dashboard endpoints.

use common::catalog::FilterOptions;
use common::chart_data::{
    BenchmarkRow, DensificationData, EvolutionData, RepartitionData, RisquesData, TopCommuneRow,
    TypologieRow,
};
use common::commune::{CommuneCoords, CommuneRow, LastUpdate};
use common::filter_query::DashboardQuery;
use common::metrics::{Metrics, TrajectoryData};
use dioxus::prelude::*;

#[server]
pub async fn metrics(query: DashboardQuery) -> Result<Metrics, ServerFnError> {
    let x = backend::api::metrics(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn trajectory(query: DashboardQuery) -> Result<TrajectoryData, ServerFnError> {
    let x = backend::api::trajectory(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn evolution(query: DashboardQuery) -> Result<EvolutionData, ServerFnError> {
    let x = backend::api::evolution(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn repartition(query: DashboardQuery) -> Result<RepartitionData, ServerFnError> {
    let x = backend::api::repartition(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn top_communes(query: DashboardQuery) -> Result<Vec<TopCommuneRow>, ServerFnError> {
    let x = backend::api::top_communes(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn typologie(query: DashboardQuery) -> Result<Vec<TypologieRow>, ServerFnError> {
    let x = backend::api::typologie(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn risques(query: DashboardQuery) -> Result<RisquesData, ServerFnError> {
    let x = backend::api::risques(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn densification(query: DashboardQuery) -> Result<DensificationData, ServerFnError> {
    let x = backend::api::densification(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn benchmark(query: DashboardQuery) -> Result<Vec<BenchmarkRow>, ServerFnError> {
    let x = backend::api::benchmark(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn communes(query: DashboardQuery) -> Result<Vec<CommuneRow>, ServerFnError> {
    let x = backend::api::communes(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn communes_coords(query: DashboardQuery) -> Result<Vec<CommuneCoords>, ServerFnError> {
    let x = backend::api::communes_coords(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn filter_options(query: DashboardQuery) -> Result<FilterOptions, ServerFnError> {
    let x = backend::api::filter_options(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn last_update(query: DashboardQuery) -> Result<LastUpdate, ServerFnError> {
    let x = backend::api::last_update(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
