//! Dashboard root: owns the filter controller and feeds the view signals.

use dioxus::prelude::*;
use futures_util::StreamExt;

use common::dashboard_state::MutationEffect;
use common::endpoint::Endpoint;
use common::filter_controller::FilterController;
use common::perimeter::Perimeter;

use crate::components::kpi_cards::KpiCardStrip;
use crate::components::sidebar::Sidebar;
use crate::components::tabs::DashboardTabs;
use crate::components::top_bar::TopBar;
use crate::data_definitions::commands::DashboardCommand;
use crate::data_definitions::server_gateway::ServerGateway;
use crate::data_definitions::view_state::DashboardViewState;

async fn reload_all(
    controller: &mut FilterController<ServerGateway>,
    view_state: &mut DashboardViewState,
) {
    view_state.clear_payloads();
    // KPI payloads settle first so the header never waits on the charts
    for (endpoint, result) in controller
        .load_batch(&[Endpoint::Metrics, Endpoint::Trajectory])
        .await
    {
        view_state.set_payload(endpoint, result);
    }
    for (endpoint, result) in controller.load_batch(&Endpoint::CHART_BATCH).await {
        view_state.set_payload(endpoint, result);
    }
}

fn mirror_filters(controller: &FilterController<ServerGateway>, view_state: &mut DashboardViewState) {
    view_state.sync_filters(
        controller.perimeter(),
        controller.state().filters(),
        controller.state().catalog(),
    );
}

#[component]
pub fn DashboardPage() -> Element {
    let view_state = use_context_provider(DashboardViewState::new);

    // Single task driving all mutations. Commands are applied one at a time:
    // the cache clear, the dependent catalog refresh and the reload of one
    // click all finish before the next click is looked at.
    use_coroutine(move |mut rx: UnboundedReceiver<DashboardCommand>| async move {
        let mut view_state = view_state;
        let mut controller = FilterController::new(ServerGateway, Perimeter::default());

        if let Err(err) = controller.refresh_all_catalogs().await {
            view_state.catalog_error.set(Some(err));
        }
        mirror_filters(&controller, &mut view_state);
        reload_all(&mut controller, &mut view_state).await;

        while let Some(command) = rx.next().await {
            let outcome = match command {
                DashboardCommand::SetPerimeter(perimeter) => {
                    controller.set_perimeter(perimeter).await
                }
                DashboardCommand::ToggleFilter(dimension, choice) => {
                    controller.toggle_option(dimension, choice).await
                }
                DashboardCommand::Reload => Ok(MutationEffect {
                    reload_needed: true,
                    catalogs_to_refresh: Vec::new(),
                }),
            };
            match outcome {
                Ok(effect) => {
                    view_state.catalog_error.set(None);
                    mirror_filters(&controller, &mut view_state);
                    if effect.reload_needed {
                        reload_all(&mut controller, &mut view_state).await;
                    }
                }
                Err(err) => {
                    // failed catalog refresh: prior selection and data stay up
                    view_state.catalog_error.set(Some(err));
                    mirror_filters(&controller, &mut view_state);
                }
            }
        }
    });

    rsx! {
        Title { "Suivi du foncier ZAN" }
        div {
            id: "x-dashboard-root",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
                background-color: #0F172A;
                color: #E2E8F0;
            ",
            Sidebar {}
            div {
                id: "x-dashboard-main",
                style: "
                    flex-grow: 1;
                    min-width: 100px;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    overflow-y: auto;
                ",
                TopBar {}
                KpiCardStrip {}
                DashboardTabs {}
            }
        }
    }
}
