//! Headline figures and the ZAN trajectory status card.

use dioxus::prelude::*;

use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

#[component]
pub fn KpiCardStrip() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let metrics = view_state.metrics;
    let trajectory = view_state.trajectory;

    rsx! {
        div {
            id: "x-kpi-strip",
            style: "
                flex-shrink: 0;
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 16px;
                padding: 20px 24px;
            ",
            match &*metrics.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(m)) => rsx! {
                    KpiCard {
                        label: "Communes".to_string(),
                        value: format!("{}", m.nb_communes),
                        detail: m.perimetre.clone(),
                    }
                    KpiCard {
                        label: "Artificialisation 2009-2024".to_string(),
                        value: format!("{:.0} ha", m.artif_total_ha),
                        detail: format!("dont habitat {:.0} ha", m.artif_habitat_ha),
                    }
                    KpiCard {
                        label: "Population 2021".to_string(),
                        value: format!("{}", m.population),
                        detail: format!("{:+} hab. depuis 2015", m.evolution_pop),
                    }
                    KpiCard {
                        label: "Conso / nouvel habitant".to_string(),
                        value: format!("{:.0} m²", m.conso_par_hab),
                        detail: "période 2015-2021".to_string(),
                    }
                    KpiCard {
                        label: "Enveloppe ZAN 2021-2031".to_string(),
                        value: format!("{:.1} ha", m.enveloppe_zan),
                        detail: format!("reste {:.1} ha", m.reste_disponible),
                    }
                },
            }
            match &*trajectory.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(t)) => rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 6px;
                            background-color: #1E293B;
                            border-left: 4px solid {t.statut.color()};
                            border-radius: 8px;
                            padding: 14px 18px;
                            min-width: 200px;
                        ",
                        div {
                            style: "font-size: 12px; color: #94A3B8;",
                            "Trajectoire ZAN"
                        }
                        div {
                            style: "font-size: 22px; font-weight: 700; color: {t.statut.color()};",
                            "{t.statut.label()}"
                        }
                        div {
                            style: "font-size: 13px; color: #CBD5E1;",
                            "{t.taux_enveloppe:.1} % de l'enveloppe consommée"
                        }
                        // usage bar against the envelope
                        div {
                            style: "width: 100%; height: 6px; background-color: #0F172A; border-radius: 3px; overflow: hidden;",
                            div {
                                style: "
                                    width: {t.taux_enveloppe.min(100.0)}%;
                                    height: 100%;
                                    background-color: {t.statut.color()};
                                ",
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn KpiCard(label: ReadSignal<String>, value: ReadSignal<String>, detail: ReadSignal<String>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                background-color: #1E293B;
                border-radius: 8px;
                padding: 14px 18px;
                min-width: 170px;
            ",
            div {
                style: "font-size: 12px; color: #94A3B8;",
                "{label}"
            }
            div {
                style: "font-size: 22px; font-weight: 700; color: #F8FAFC;",
                "{value}"
            }
            div {
                style: "font-size: 13px; color: #CBD5E1;",
                "{detail}"
            }
        }
    }
}
