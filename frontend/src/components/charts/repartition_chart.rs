//! Donut of the consumption split by destination.

use dioxus::prelude::*;

use common::chart_data::RepartitionData;

use crate::components::charts::{ChartCard, DESTINATION_COLORS};
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

/// conic-gradient stops for the four destinations, in slice order.
fn donut_gradient(data: &RepartitionData) -> String {
    let total = data.total().max(f64::EPSILON);
    let mut stops = Vec::new();
    let mut angle = 0.0;
    for ((_, value), (_, color)) in data.slices().iter().zip(DESTINATION_COLORS) {
        let next = angle + value / total * 360.0;
        stops.push(format!("{color} {angle:.1}deg {next:.1}deg"));
        angle = next;
    }
    format!("conic-gradient({})", stops.join(", "))
}

#[component]
pub fn RepartitionChart() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let repartition = view_state.repartition;

    rsx! {
        ChartCard {
            title: "Répartition par destination".to_string(),
            subtitle: "Part de chaque usage dans la consommation totale".to_string(),
            match &*repartition.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(data)) => {
                    let total = data.total();
                    let gradient = donut_gradient(data);
                    rsx! {
                        div {
                            style: "display: flex; flex-direction: row; align-items: center; gap: 24px;",
                            div {
                                style: "
                                    width: 180px;
                                    height: 180px;
                                    border-radius: 50%;
                                    background: {gradient};
                                    display: flex;
                                    align-items: center;
                                    justify-content: center;
                                    flex-shrink: 0;
                                ",
                                div {
                                    style: "
                                        width: 110px;
                                        height: 110px;
                                        border-radius: 50%;
                                        background-color: #1E293B;
                                        display: flex;
                                        flex-direction: column;
                                        align-items: center;
                                        justify-content: center;
                                    ",
                                    div {
                                        style: "font-size: 18px; font-weight: 700; color: #F8FAFC;",
                                        "{total:.0} ha"
                                    }
                                    div {
                                        style: "font-size: 11px; color: #94A3B8;",
                                        "2009-2024"
                                    }
                                }
                            }
                            div {
                                style: "display: flex; flex-direction: column; gap: 8px;",
                                for ((label, value), (_, color)) in data.slices().iter().zip(DESTINATION_COLORS) {
                                    {
                                        let pct = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                                        rsx! {
                                            div {
                                                key: "{label}",
                                                style: "display: flex; align-items: center; gap: 8px; font-size: 13px; color: #CBD5E1;",
                                                div {
                                                    style: "width: 12px; height: 12px; border-radius: 3px; background-color: {color}; flex-shrink: 0;",
                                                }
                                                "{label} : {value:.1} ha ({pct:.0} %)"
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
