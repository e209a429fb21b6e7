//! Land taken per new inhabitant, least efficient growth communes first.

use dioxus::prelude::*;

use crate::components::charts::{COLOR_MIXTE, ChartCard};
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

#[component]
pub fn DensificationPanel() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let densification = view_state.densification;

    rsx! {
        ChartCard {
            title: "Efficience foncière".to_string(),
            subtitle: "m² consommés par nouvel habitant (communes en croissance)".to_string(),
            match &*densification.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(data)) => {
                    let max = data
                        .communes
                        .iter()
                        .map(|r| r.m2_par_habitant)
                        .fold(f64::EPSILON, f64::max);
                    rsx! {
                        div {
                            style: "font-size: 13px; color: #CBD5E1;",
                            span { style: "font-weight: 700; color: #F8FAFC;", "{data.moyenne_m2_par_habitant:.0} m²/hab" }
                            " en moyenne sur {data.nb_communes_croissance} communes en croissance"
                        }
                        div {
                            style: "display: flex; flex-direction: column; gap: 6px;",
                            for row in data.communes.iter() {
                                div {
                                    key: "{row.commune}",
                                    style: "display: flex; align-items: center; gap: 10px;",
                                    div {
                                        style: "
                                            width: 130px;
                                            flex-shrink: 0;
                                            font-size: 12px;
                                            color: #CBD5E1;
                                            overflow: hidden;
                                            text-overflow: ellipsis;
                                            white-space: nowrap;
                                        ",
                                        "{row.commune}"
                                    }
                                    div {
                                        style: "
                                            flex-grow: 1;
                                            height: 12px;
                                            background-color: #0F172A;
                                            border-radius: 3px;
                                            overflow: hidden;
                                        ",
                                        title: "{row.conso_ha:.1} ha pour {row.evolution_pop} habitants",
                                        div {
                                            style: "
                                                width: {row.m2_par_habitant / max * 100.0}%;
                                                height: 100%;
                                                background-color: {COLOR_MIXTE};
                                            ",
                                        }
                                    }
                                    div {
                                        style: "width: 80px; flex-shrink: 0; font-size: 12px; color: #94A3B8; text-align: right;",
                                        "{row.m2_par_habitant:.0} m²/hab"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
