//! Left panel: perimeter choice, filter dropdowns and the CSV export link.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::icons::md_toggle_icons::{MdRadioButtonChecked, MdRadioButtonUnchecked};

use common::filter_query::{DashboardQuery, FilterDimension};
use common::perimeter::Perimeter;

use crate::components::filter_components::filter_dropdown::{FilterBar, FilterDropdown};
use crate::data_definitions::commands::DashboardCommand;
use crate::data_definitions::view_state::DashboardViewState;

#[component]
pub fn Sidebar() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let catalog_error = view_state.catalog_error;

    rsx! {
        div {
            id: "x-sidebar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 260px;
                flex-shrink: 0;
                height: 100%;
                background-color: #1E293B;
                padding: 24px 16px;
                overflow-y: auto;
            ",
            div {
                style: "font-size: 13px; font-weight: 700; color: #94A3B8; letter-spacing: 1px;",
                "PÉRIMÈTRE"
            }
            PerimeterPicker {}

            div {
                style: "font-size: 13px; font-weight: 700; color: #94A3B8; letter-spacing: 1px;",
                "FILTRES"
            }
            FilterBar {
                FilterDropdown { dimension: FilterDimension::Department }
                FilterDropdown { dimension: FilterDimension::Commune }
                FilterDropdown { dimension: FilterDimension::Typology }
            }

            if let Some(err) = catalog_error.read().as_ref() {
                div {
                    style: "
                        color: #F56565;
                        font-size: 13px;
                        border: 1px solid #F56565;
                        border-radius: 6px;
                        padding: 8px;
                    ",
                    "{err}"
                }
            }

            div { style: "flex-grow: 1;" }
            ExportLink {}
        }
    }
}

#[component]
fn PerimeterPicker() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let selected = view_state.perimeter;
    let commands = use_coroutine_handle::<DashboardCommand>();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            for perimeter in Perimeter::ALL {
                button {
                    key: "{perimeter.as_str()}",
                    style: "
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        background: none;
                        border: none;
                        color: #E2E8F0;
                        font-size: 14px;
                        padding: 4px 0;
                        text-align: left;
                    ",
                    onclick: move |_| {
                        commands.send(DashboardCommand::SetPerimeter(perimeter));
                    },
                    if *selected.read() == perimeter {
                        Icon { icon: MdRadioButtonChecked, style: "width: 20px; height: 20px; color: #2E86AB; flex-shrink: 0;" }
                    } else {
                        Icon { icon: MdRadioButtonUnchecked, style: "width: 20px; height: 20px; color: #64748B; flex-shrink: 0;" }
                    }
                    "{perimeter.short_label()}"
                }
            }
        }
    }
}

/// Download link carrying the current perimeter and filters as query
/// parameters, so the served CSV matches what the table shows.
#[component]
fn ExportLink() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let href = use_memo(move || {
        let query = DashboardQuery::new(
            *view_state.perimeter.read(),
            view_state.filters.read().clone(),
        );
        let encoded = serde_urlencoded::to_string(query.query_pairs()).unwrap_or_default();
        format!("/export/communes.csv?{encoded}")
    });

    rsx! {
        a {
            href: "{href}",
            download: "communes_zan.csv",
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 8px;
                color: #E2E8F0;
                background-color: #2E86AB;
                border-radius: 6px;
                padding: 10px;
                font-size: 14px;
                text-decoration: none;
            ",
            Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" }
            "Exporter le tableau (CSV)"
        }
    }
}
