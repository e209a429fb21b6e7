//! Checkbox dropdowns over the option catalogs, one per filter dimension.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use common::filter_query::{FilterChoice, FilterDimension};

use crate::data_definitions::commands::DashboardCommand;
use crate::data_definitions::view_state::DashboardViewState;

/// At most one dropdown is open at a time; the open one is tracked here so a
/// click on any trigger closes its sibling.
#[derive(Clone, Copy)]
struct FilterBarContext {
    expanded_dimension: Signal<Option<FilterDimension>>,
    set_expanded: Callback<Option<FilterDimension>>,
}

#[component]
pub fn FilterBar(children: Element) -> Element {
    let mut expanded_dimension = use_signal(|| None);
    let set_expanded: Callback<Option<FilterDimension>> =
        Callback::new(move |dimension: Option<FilterDimension>| {
            expanded_dimension.set(dimension);
        });
    use_context_provider(|| FilterBarContext {
        expanded_dimension,
        set_expanded,
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            {children}
        }
    }
}

#[component]
pub fn FilterDropdown(dimension: FilterDimension) -> Element {
    let bar = use_context::<FilterBarContext>();
    let expanded_dimension = bar.expanded_dimension;
    let set_expanded = bar.set_expanded;
    let view_state = use_context::<DashboardViewState>();
    let filters = view_state.filters;

    let is_expanded = use_memo(move || *expanded_dimension.read() == Some(dimension));
    let is_filtered = use_memo(move || !filters.read().is_unrestricted(dimension));
    let border_color = use_memo(move || if is_filtered() { "#2E86AB" } else { "#475569" });
    let summary = use_memo(move || {
        let filters = filters.read();
        if filters.is_unrestricted(dimension) {
            "Tous".to_string()
        } else {
            let selected = filters.selected(dimension);
            if selected.len() == 1 {
                selected.iter().next().cloned().unwrap_or_default()
            } else {
                format!("{} sélectionnés", selected.len())
            }
        }
    });

    rsx! {
        div {
            style: "position: relative;",
            button {
                onclick: move |_| {
                    if is_expanded() {
                        set_expanded(None);
                    } else {
                        set_expanded(Some(dimension));
                    }
                },
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    gap: 6px;
                    border: 1px solid {border_color()};
                    border-radius: 6px;
                    background-color: #0F172A;
                    color: #E2E8F0;
                    padding: 8px 10px;
                    font-size: 14px;
                    text-align: left;
                ",
                div {
                    div {
                        style: "font-size: 11px; color: #94A3B8;",
                        "{dimension.display_name()}"
                    }
                    "{summary}"
                }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color: #94A3B8; flex-shrink: 0;" }
            }

            if is_expanded() {
                div {
                    style: "
                        position: absolute;
                        top: calc(100% + 4px);
                        left: 0;
                        right: 0;
                        max-height: 320px;
                        overflow-y: auto;
                        background-color: #1E293B;
                        border: 1px solid #475569;
                        border-radius: 6px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.4);
                        z-index: 1000;
                    ",
                    FilterOptionList { dimension }
                }
                div {
                    style: "
                        position: fixed;
                        top: 0;
                        left: 0;
                        z-index: 999;
                        width: 100vw;
                        height: 100vh;
                    ",
                    onclick: move |_| {
                        set_expanded(None);
                    },
                }
            }
        }
    }
}

#[component]
fn FilterOptionList(dimension: FilterDimension) -> Element {
    let view_state = use_context::<DashboardViewState>();
    let catalog = view_state.catalog;
    let filters = view_state.filters;

    let options = use_memo(move || catalog.read().options(dimension).to_vec());
    let unrestricted = use_memo(move || filters.read().is_unrestricted(dimension));

    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 4px; z-index: 1001; position: relative;",
            li {
                FilterCheckboxRow {
                    dimension,
                    choice: FilterChoice::All,
                    label: "Tous".to_string(),
                    checked: unrestricted(),
                }
            }
            for option in options() {
                li {
                    key: "{option}",
                    FilterCheckboxRow {
                        dimension,
                        choice: FilterChoice::Value(option.clone()),
                        label: option.clone(),
                        checked: filters.read().is_selected(dimension, &option),
                    }
                }
            }
        }
    }
}

#[component]
fn FilterCheckboxRow(
    dimension: FilterDimension,
    choice: FilterChoice,
    label: ReadSignal<String>,
    checked: ReadSignal<bool>,
) -> Element {
    let commands = use_coroutine_handle::<DashboardCommand>();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 4px 6px;
                align-items: center;
                color: #E2E8F0;
                font-size: 14px;
            ",
            onclick: move |_| {
                commands.send(DashboardCommand::ToggleFilter(dimension, choice.clone()));
            },
            if checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #2E86AB; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #64748B; flex-shrink: 0;" }
            }
            div {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{label}"
            }
        }
    }
}
