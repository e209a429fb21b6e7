//! Tab strip over the chart panels. Only the active panel is mounted, so a
//! chart is laid out against its real container size when it appears.

use dioxus::prelude::*;

use crate::components::charts::benchmark_panel::BenchmarkPanel;
use crate::components::charts::densification_panel::DensificationPanel;
use crate::components::charts::evolution_chart::EvolutionChart;
use crate::components::charts::repartition_chart::RepartitionChart;
use crate::components::charts::risques_panel::RisquesPanel;
use crate::components::charts::top_communes_chart::TopCommunesChart;
use crate::components::charts::typologie_chart::TypologieChart;
use crate::components::commune_table::CommuneTable;
use crate::components::map_panel::MapPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Consommation,
    Communes,
    Typologies,
    Risques,
    Benchmark,
}

impl DashboardTab {
    const ALL: [DashboardTab; 5] = [
        DashboardTab::Consommation,
        DashboardTab::Communes,
        DashboardTab::Typologies,
        DashboardTab::Risques,
        DashboardTab::Benchmark,
    ];

    fn label(self) -> &'static str {
        match self {
            DashboardTab::Consommation => "Consommation",
            DashboardTab::Communes => "Communes",
            DashboardTab::Typologies => "Typologies",
            DashboardTab::Risques => "Risques & densification",
            DashboardTab::Benchmark => "Comparaison",
        }
    }
}

#[component]
pub fn DashboardTabs() -> Element {
    let mut active_tab = use_signal(|| DashboardTab::Consommation);

    rsx! {
        div {
            id: "x-dashboard-tabs",
            style: "display: flex; flex-direction: column; flex-grow: 1; padding: 0 24px 24px 24px;",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 4px;
                    border-bottom: 1px solid #1E293B;
                    margin-bottom: 16px;
                ",
                for tab in DashboardTab::ALL {
                    button {
                        key: "{tab.label()}",
                        style: if *active_tab.read() == tab {
                            "cursor: pointer; background: none; border: none; border-bottom: 2px solid #2E86AB; color: #F8FAFC; font-size: 14px; padding: 10px 14px;"
                        } else {
                            "cursor: pointer; background: none; border: none; border-bottom: 2px solid transparent; color: #94A3B8; font-size: 14px; padding: 10px 14px;"
                        },
                        onclick: move |_| {
                            active_tab.set(tab);
                        },
                        "{tab.label()}"
                    }
                }
            }

            match *active_tab.read() {
                DashboardTab::Consommation => rsx! {
                    div {
                        style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px;",
                        EvolutionChart {}
                        RepartitionChart {}
                    }
                },
                DashboardTab::Communes => rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        div {
                            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px;",
                            TopCommunesChart {}
                            MapPanel {}
                        }
                        CommuneTable {}
                    }
                },
                DashboardTab::Typologies => rsx! {
                    TypologieChart {}
                },
                DashboardTab::Risques => rsx! {
                    div {
                        style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px;",
                        RisquesPanel {}
                        DensificationPanel {}
                    }
                },
                DashboardTab::Benchmark => rsx! {
                    BenchmarkPanel {}
                },
            }
        }
    }
}
