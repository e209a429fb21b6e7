//! Per-commune envelope projection: who is eating their ZAN envelope fastest.

use dioxus::prelude::*;

use crate::components::charts::ChartCard;
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

fn statut_color(statut: &str) -> &'static str {
    match statut {
        "CONFORME" => "#48BB78",
        "VIGILANCE" => "#ED8936",
        _ => "#F56565",
    }
}

#[component]
pub fn RisquesPanel() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let risques = view_state.risques;

    rsx! {
        ChartCard {
            title: "Communes à risque".to_string(),
            subtitle: "Enveloppe communale (règle des 50 %) déjà consommée depuis 2021".to_string(),
            match &*risques.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(data)) => rsx! {
                    div {
                        style: "display: flex; flex-direction: row; gap: 12px;",
                        for (count, label, color) in [
                            (data.nb_conforme, "conformes", "#48BB78"),
                            (data.nb_vigilance, "en vigilance", "#ED8936"),
                            (data.nb_alerte, "en alerte", "#F56565"),
                        ] {
                            div {
                                key: "{label}",
                                style: "
                                    display: flex;
                                    align-items: center;
                                    gap: 6px;
                                    font-size: 13px;
                                    color: #CBD5E1;
                                    background-color: #0F172A;
                                    border-radius: 9999px;
                                    padding: 4px 12px;
                                ",
                                span { style: "font-weight: 700; color: {color};", "{count}" }
                                "{label}"
                            }
                        }
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
                                    title: "{row.conso_2021_2024:.2} ha sur {row.enveloppe_ha:.2} ha",
                                    div {
                                        style: "
                                            width: {row.taux_enveloppe.min(100.0)}%;
                                            height: 100%;
                                            background-color: {statut_color(&row.statut)};
                                        ",
                                    }
                                }
                                div {
                                    style: "width: 56px; flex-shrink: 0; font-size: 12px; color: {statut_color(&row.statut)}; text-align: right;",
                                    "{row.taux_enveloppe:.0} %"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
