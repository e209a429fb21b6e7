//! Annual consumption bar chart with the period mean overlaid.

use dioxus::prelude::*;

use crate::components::charts::{COLOR_ACTIVITES, COLOR_HABITAT, ChartCard};
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

#[component]
pub fn EvolutionChart() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let evolution = view_state.evolution;

    rsx! {
        ChartCard {
            title: "Évolution annuelle".to_string(),
            subtitle: "Consommation d'espace par période NAF, hectares".to_string(),
            match &*evolution.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(data)) => {
                    let max = data.consommations.iter().cloned().fold(f64::EPSILON, f64::max);
                    let moyenne = data.moyenne();
                    let moyenne_pct = (moyenne / max * 100.0).min(100.0);
                    rsx! {
                        div {
                            style: "position: relative; height: 240px;",
                            // mean line
                            div {
                                style: "
                                    position: absolute;
                                    left: 0;
                                    right: 0;
                                    bottom: calc({moyenne_pct}% + 20px);
                                    border-top: 1px dashed #94A3B8;
                                    z-index: 1;
                                ",
                                span {
                                    style: "position: absolute; right: 0; top: -16px; font-size: 11px; color: #94A3B8;",
                                    "moyenne {moyenne:.1} ha"
                                }
                            }
                            div {
                                style: "
                                    display: flex;
                                    flex-direction: row;
                                    align-items: flex-end;
                                    gap: 4px;
                                    height: 100%;
                                ",
                                for (index, periode) in data.periodes.iter().enumerate() {
                                    {
                                        let value = data.consommations.get(index).copied().unwrap_or(0.0);
                                        let height_pct = (value / max * 100.0).max(1.0);
                                        // the three ZAN-period bars stand out
                                        let color = if index >= data.periodes.len().saturating_sub(3) {
                                            COLOR_ACTIVITES
                                        } else {
                                            COLOR_HABITAT
                                        };
                                        rsx! {
                                            div {
                                                key: "{periode}",
                                                style: "
                                                    flex: 1 1 0;
                                                    display: flex;
                                                    flex-direction: column;
                                                    justify-content: flex-end;
                                                    height: 100%;
                                                ",
                                                title: "{periode} : {value:.1} ha",
                                                div {
                                                    style: "
                                                        height: calc({height_pct}% - 20px);
                                                        background-color: {color};
                                                        border-radius: 2px 2px 0 0;
                                                    ",
                                                }
                                                div {
                                                    style: "
                                                        font-size: 9px;
                                                        color: #64748B;
                                                        text-align: center;
                                                        height: 20px;
                                                        overflow: hidden;
                                                    ",
                                                    "{periode}"
                                                }
                                            }
                                        }
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
