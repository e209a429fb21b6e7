//! CSS-only chart panels.

pub mod benchmark_panel;
pub mod densification_panel;
pub mod evolution_chart;
pub mod repartition_chart;
pub mod risques_panel;
pub mod top_communes_chart;
pub mod typologie_chart;

use dioxus::prelude::*;

/// Series colors: habitat, activités, mixte, routes.
pub(crate) const COLOR_HABITAT: &str = "#2E86AB";
pub(crate) const COLOR_ACTIVITES: &str = "#A23B72";
pub(crate) const COLOR_MIXTE: &str = "#F18F01";
pub(crate) const COLOR_ROUTES: &str = "#C73E1D";

pub(crate) const DESTINATION_COLORS: [(&str, &str); 4] = [
    ("Habitat", COLOR_HABITAT),
    ("Activités", COLOR_ACTIVITES),
    ("Mixte", COLOR_MIXTE),
    ("Routes", COLOR_ROUTES),
];

#[component]
pub fn ChartCard(title: ReadSignal<String>, subtitle: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                background-color: #1E293B;
                border-radius: 8px;
                padding: 18px;
                flex-grow: 1;
                min-width: 380px;
            ",
            div {
                div {
                    style: "font-size: 16px; font-weight: 600; color: #F8FAFC;",
                    "{title}"
                }
                div {
                    style: "font-size: 12px; color: #94A3B8; margin-top: 2px;",
                    "{subtitle}"
                }
            }
            {children}
        }
    }
}
