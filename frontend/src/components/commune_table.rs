//! Sortable, searchable commune table.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDownward, MdArrowUpward};

use common::commune::CommuneRow;

use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortColumn {
    Nom,
    Departement,
    Typologie,
    ArtifTotal,
    Habitat,
    Activites,
    Population,
    EvolutionPop,
    TauxArtif,
}

impl SortColumn {
    const ALL: [SortColumn; 9] = [
        SortColumn::Nom,
        SortColumn::Departement,
        SortColumn::Typologie,
        SortColumn::ArtifTotal,
        SortColumn::Habitat,
        SortColumn::Activites,
        SortColumn::Population,
        SortColumn::EvolutionPop,
        SortColumn::TauxArtif,
    ];

    fn label(self) -> &'static str {
        match self {
            SortColumn::Nom => "Commune",
            SortColumn::Departement => "Dépt",
            SortColumn::Typologie => "Typologie",
            SortColumn::ArtifTotal => "Artif. totale (ha)",
            SortColumn::Habitat => "Habitat (ha)",
            SortColumn::Activites => "Activités (ha)",
            SortColumn::Population => "Population",
            SortColumn::EvolutionPop => "Évol. pop.",
            SortColumn::TauxArtif => "Taux artif.",
        }
    }

    fn compare(self, a: &CommuneRow, b: &CommuneRow) -> std::cmp::Ordering {
        match self {
            SortColumn::Nom => a.nom.cmp(&b.nom),
            SortColumn::Departement => a.departement.cmp(&b.departement),
            SortColumn::Typologie => a.typologie.cmp(&b.typologie),
            SortColumn::ArtifTotal => a.artif_total_ha.total_cmp(&b.artif_total_ha),
            SortColumn::Habitat => a.habitat_ha.total_cmp(&b.habitat_ha),
            SortColumn::Activites => a.activites_ha.total_cmp(&b.activites_ha),
            SortColumn::Population => a.population.cmp(&b.population),
            SortColumn::EvolutionPop => a.evolution_pop.cmp(&b.evolution_pop),
            SortColumn::TauxArtif => a.taux_artif.total_cmp(&b.taux_artif),
        }
    }
}

#[component]
pub fn CommuneTable() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let communes = view_state.communes;

    let filter_input = use_signal(String::new);
    let mut applied_filter = use_signal(String::new);
    let mut sort_column = use_signal(|| SortColumn::Nom);
    let mut sort_descending = use_signal(|| false);

    let visible_rows = use_memo(move || {
        let needle = applied_filter.read().to_lowercase();
        let mut rows: Vec<CommuneRow> = match &*communes.read() {
            Some(Ok(rows)) => rows
                .iter()
                .filter(|r| needle.is_empty() || r.nom.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };
        let column = *sort_column.read();
        rows.sort_by(|a, b| column.compare(a, b));
        if *sort_descending.read() {
            rows.reverse();
        }
        rows
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                background-color: #1E293B;
                border-radius: 8px;
                padding: 18px;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 16px;",
                div {
                    style: "font-size: 16px; font-weight: 600; color: #F8FAFC;",
                    "Détail par commune"
                }
                input {
                    r#type: "text",
                    placeholder: "Rechercher une commune…",
                    value: "{filter_input}",
                    style: "
                        background-color: #0F172A;
                        color: #E2E8F0;
                        border: 1px solid #475569;
                        border-radius: 6px;
                        padding: 7px 10px;
                        font-size: 13px;
                        width: 240px;
                    ",
                    oninput: move |e| {
                        let mut filter_input = filter_input;
                        let value = e.value();
                        filter_input.set(value.clone());
                        // debounce so a keystroke burst filters once
                        spawn(async move {
                            gloo_timers::future::TimeoutFuture::new(250).await;
                            if *filter_input.peek() == value {
                                applied_filter.set(value);
                            }
                        });
                    },
                }
            }
            match &*communes.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(_)) => rsx! {
                    div {
                        style: "overflow-x: auto;",
                        table {
                            style: "width: 100%; border-collapse: collapse; font-size: 13px; color: #CBD5E1;",
                            thead {
                                tr {
                                    for column in SortColumn::ALL {
                                        th {
                                            key: "{column.label()}",
                                            style: "
                                                cursor: pointer;
                                                text-align: left;
                                                padding: 8px;
                                                border-bottom: 1px solid #334155;
                                                color: #94A3B8;
                                                font-weight: 600;
                                                white-space: nowrap;
                                            ",
                                            onclick: move |_| {
                                                if *sort_column.peek() == column {
                                                    sort_descending.toggle();
                                                } else {
                                                    sort_column.set(column);
                                                    sort_descending.set(false);
                                                }
                                            },
                                            "{column.label()}"
                                            if *sort_column.read() == column {
                                                if *sort_descending.read() {
                                                    Icon { icon: MdArrowDownward, style: "width: 14px; height: 14px; vertical-align: middle;" }
                                                } else {
                                                    Icon { icon: MdArrowUpward, style: "width: 14px; height: 14px; vertical-align: middle;" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            tbody {
                                for row in visible_rows().iter() {
                                    tr {
                                        key: "{row.code}",
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A; color: #F8FAFC;", "{row.nom}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.departement}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.typologie}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.artif_total_ha:.2}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.habitat_ha:.2}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.activites_ha:.2}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.population}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.evolution_pop:+}" }
                                        td { style: "padding: 8px; border-bottom: 1px solid #0F172A;", "{row.taux_artif:.2} %" }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        style: "font-size: 12px; color: #64748B;",
                        "{visible_rows().len()} communes affichées"
                    }
                },
            }
        }
    }
}
