//! Side-by-side comparison of the two perimeters, always unfiltered.

use dioxus::prelude::*;

use crate::components::charts::ChartCard;
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

#[component]
pub fn BenchmarkPanel() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let benchmark = view_state.benchmark;

    rsx! {
        ChartCard {
            title: "Comparaison des territoires".to_string(),
            subtitle: "Les deux périmètres complets, hors filtres".to_string(),
            match &*benchmark.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(rows)) => rsx! {
                    table {
                        style: "width: 100%; border-collapse: collapse; font-size: 13px; color: #CBD5E1;",
                        thead {
                            tr {
                                for header in ["Territoire", "Communes", "Artif. 2009-2024", "Population", "m²/hab", "Enveloppe consommée"] {
                                    th {
                                        key: "{header}",
                                        style: "text-align: left; padding: 8px; border-bottom: 1px solid #334155; color: #94A3B8; font-weight: 600;",
                                        "{header}"
                                    }
                                }
                            }
                        }
                        tbody {
                            for row in rows.iter() {
                                tr {
                                    key: "{row.perimetre}",
                                    td { style: "padding: 8px; border-bottom: 1px solid #1E293B;", "{row.perimetre}" }
                                    td { style: "padding: 8px; border-bottom: 1px solid #1E293B;", "{row.nb_communes}" }
                                    td { style: "padding: 8px; border-bottom: 1px solid #1E293B;", "{row.artif_total_ha:.0} ha" }
                                    td { style: "padding: 8px; border-bottom: 1px solid #1E293B;", "{row.population}" }
                                    td { style: "padding: 8px; border-bottom: 1px solid #1E293B;", "{row.conso_par_hab:.0}" }
                                    td { style: "padding: 8px; border-bottom: 1px solid #1E293B;", "{row.taux_enveloppe:.1} %" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
