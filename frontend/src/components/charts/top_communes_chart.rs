//! Horizontal stacked bars for the ten biggest consumers.

use dioxus::prelude::*;

use crate::components::charts::{
    COLOR_ACTIVITES, COLOR_HABITAT, COLOR_MIXTE, COLOR_ROUTES, ChartCard, DESTINATION_COLORS,
};
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

#[component]
pub fn TopCommunesChart() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let top_communes = view_state.top_communes;

    rsx! {
        ChartCard {
            title: "Top 10 des communes".to_string(),
            subtitle: "Consommation 2009-2024 par destination, hectares".to_string(),
            match &*top_communes.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(rows)) => {
                    let max = rows.iter().map(|r| r.total).fold(f64::EPSILON, f64::max);
                    rsx! {
                        div {
                            style: "display: flex; flex-direction: column; gap: 6px;",
                            for row in rows.iter() {
                                div {
                                    key: "{row.commune}",
                                    style: "display: flex; align-items: center; gap: 10px;",
                                    div {
                                        style: "
                                            width: 140px;
                                            flex-shrink: 0;
                                            font-size: 12px;
                                            color: #CBD5E1;
                                            text-align: right;
                                            overflow: hidden;
                                            text-overflow: ellipsis;
                                            white-space: nowrap;
                                        ",
                                        "{row.commune}"
                                    }
                                    div {
                                        style: "
                                            flex-grow: 1;
                                            display: flex;
                                            flex-direction: row;
                                            height: 16px;
                                            border-radius: 3px;
                                            overflow: hidden;
                                        ",
                                        title: "{row.commune} : {row.total:.1} ha",
                                        for (value, color) in [
                                            (row.habitat, COLOR_HABITAT),
                                            (row.activites, COLOR_ACTIVITES),
                                            (row.mixte, COLOR_MIXTE),
                                            (row.routes, COLOR_ROUTES),
                                        ] {
                                            div {
                                                style: "width: {value / max * 100.0}%; background-color: {color};",
                                            }
                                        }
                                    }
                                    div {
                                        style: "width: 60px; flex-shrink: 0; font-size: 12px; color: #94A3B8;",
                                        "{row.total:.1} ha"
                                    }
                                }
                            }
                            div {
                                style: "display: flex; flex-direction: row; gap: 16px; margin-top: 8px;",
                                for (label, color) in DESTINATION_COLORS {
                                    div {
                                        key: "{label}",
                                        style: "display: flex; align-items: center; gap: 6px; font-size: 12px; color: #94A3B8;",
                                        div {
                                            style: "width: 10px; height: 10px; border-radius: 2px; background-color: {color};",
                                        }
                                        "{label}"
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
