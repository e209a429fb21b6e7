//! Loading and request-error placeholders for the payload panels.

use common::gateway::RequestError;
use dioxus::prelude::*;

use crate::data_definitions::commands::DashboardCommand;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                color: #94A3B8;
                font-size: 15px;
                padding: 30px;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            "Chargement…"
        }
    }
}

/// Failed request placeholder with a retry button. The retry goes through the
/// coroutine, so it reloads everything under the current filters.
#[component]
pub fn RequestErrorNotice(error: ReadSignal<RequestError>) -> Element {
    let commands = use_coroutine_handle::<DashboardCommand>();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                padding: 30px;
            ",
            div {
                style: "color:#F56565; font-size: 15px;",
                "{error}"
            }
            button {
                style: "
                    cursor: pointer;
                    color: #E2E8F0;
                    background-color: #1E293B;
                    border: 1px solid #475569;
                    border-radius: 6px;
                    padding: 6px 16px;
                    font-size: 14px;
                ",
                onclick: move |_| {
                    commands.send(DashboardCommand::Reload);
                },
                "Réessayer"
            }
        }
    }
}
