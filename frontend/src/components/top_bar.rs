//! Dashboard header: title, perimeter label and data freshness.

use dioxus::prelude::*;

use crate::data_definitions::view_state::DashboardViewState;

#[component]
pub fn TopBar() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let perimeter = view_state.perimeter;
    let last_update = view_state.last_update;

    rsx! {
        div {
            id: "x-top-bar",
            style: "
                flex-shrink: 0;
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                padding: 18px 24px;
                border-bottom: 1px solid #1E293B;
            ",
            div {
                h1 {
                    style: "font-size: 22px; font-weight: 700; margin: 0; color: #F8FAFC;",
                    "Suivi de la consommation foncière"
                }
                div {
                    style: "font-size: 14px; color: #94A3B8; margin-top: 4px;",
                    "{perimeter.read().display_name()} — objectif ZAN 2021-2031"
                }
            }
            div {
                style: "font-size: 12px; color: #64748B; text-align: right;",
                match &*last_update.read() {
                    Some(Ok(update)) => rsx! {
                        div { "Source : {update.source} ({update.periode})" }
                        div { "Mise à jour : {update.date}" }
                    },
                    Some(Err(_)) => rsx! {
                        div { "Source indisponible" }
                    },
                    None => rsx! {
                        div { "…" }
                    },
                }
            }
        }
    }
}
