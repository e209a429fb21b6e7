//! Consumption and efficiency per AAV typology.

use dioxus::prelude::*;

use common::chart_data::EfficienceStatus;

use crate::components::charts::{
    COLOR_ACTIVITES, COLOR_HABITAT, COLOR_MIXTE, COLOR_ROUTES, ChartCard,
};
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

fn badge_color(status: EfficienceStatus) -> &'static str {
    match status {
        EfficienceStatus::Conforme => "#48BB78",
        EfficienceStatus::Vigilance => "#ED8936",
        EfficienceStatus::Critique => "#F56565",
    }
}

#[component]
pub fn TypologieChart() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let typologie = view_state.typologie;

    rsx! {
        ChartCard {
            title: "Typologies de communes".to_string(),
            subtitle: "Consommation par typologie AAV 2020 et efficience foncière".to_string(),
            match &*typologie.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(rows)) => {
                    let max = rows.iter().map(|r| r.total).fold(f64::EPSILON, f64::max);
                    rsx! {
                        div {
                            style: "display: flex; flex-direction: column; gap: 14px;",
                            for row in rows.iter() {
                                {
                                    let status = EfficienceStatus::from_efficience(row.efficience);
                                    rsx! {
                                        div {
                                            key: "{row.typologie}",
                                            style: "display: flex; flex-direction: column; gap: 6px;",
                                            div {
                                                style: "display: flex; align-items: center; justify-content: space-between;",
                                                div {
                                                    style: "font-size: 14px; color: #E2E8F0;",
                                                    "{row.typologie}"
                                                }
                                                div {
                                                    style: "display: flex; align-items: center; gap: 10px;",
                                                    div {
                                                        style: "font-size: 12px; color: #94A3B8;",
                                                        if row.efficience > 0.0 {
                                                            "{row.efficience:.0} m²/hab"
                                                        } else {
                                                            "population stable"
                                                        }
                                                    }
                                                    div {
                                                        style: "
                                                            font-size: 11px;
                                                            font-weight: 600;
                                                            color: #0F172A;
                                                            background-color: {badge_color(status)};
                                                            border-radius: 9999px;
                                                            padding: 2px 10px;
                                                        ",
                                                        "{status.label()}"
                                                    }
                                                }
                                            }
                                            div {
                                                style: "
                                                    display: flex;
                                                    flex-direction: row;
                                                    height: 14px;
                                                    border-radius: 3px;
                                                    overflow: hidden;
                                                ",
                                                title: "{row.typologie} : {row.total:.1} ha",
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
