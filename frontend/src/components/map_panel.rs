//! Schematic map: one dot per commune, sized by consumed surface.

use dioxus::prelude::*;

use common::commune::CommuneCoords;

use crate::components::charts::{COLOR_HABITAT, ChartCard};
use crate::components::loading::{LoadingIndicator, RequestErrorNotice};
use crate::data_definitions::view_state::DashboardViewState;

struct Bounds {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

fn bounds(coords: &[CommuneCoords]) -> Option<Bounds> {
    let first = coords.first()?;
    let mut b = Bounds {
        lat_min: first.latitude,
        lat_max: first.latitude,
        lon_min: first.longitude,
        lon_max: first.longitude,
    };
    for c in coords {
        b.lat_min = b.lat_min.min(c.latitude);
        b.lat_max = b.lat_max.max(c.latitude);
        b.lon_min = b.lon_min.min(c.longitude);
        b.lon_max = b.lon_max.max(c.longitude);
    }
    Some(b)
}

#[component]
pub fn MapPanel() -> Element {
    let view_state = use_context::<DashboardViewState>();
    let communes_coords = view_state.communes_coords;

    rsx! {
        ChartCard {
            title: "Carte du territoire".to_string(),
            subtitle: "Surface artificialisée par commune".to_string(),
            match &*communes_coords.read() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { RequestErrorNotice { error: e.clone() } },
                Some(Ok(coords)) => match bounds(coords) {
                    None => rsx! {
                        div {
                            style: "color: #64748B; font-size: 14px; padding: 30px; text-align: center;",
                            "Aucune commune géolocalisée pour cette sélection"
                        }
                    },
                    Some(b) => {
                        let lat_span = (b.lat_max - b.lat_min).max(f64::EPSILON);
                        let lon_span = (b.lon_max - b.lon_min).max(f64::EPSILON);
                        let max_ha = coords.iter().map(|c| c.artif_total_ha).fold(f64::EPSILON, f64::max);
                        rsx! {
                            div {
                                style: "
                                    position: relative;
                                    height: 340px;
                                    background-color: #0F172A;
                                    border-radius: 6px;
                                    overflow: hidden;
                                ",
                                for c in coords.iter() {
                                    {
                                        // 5 % margin keeps edge communes inside the frame
                                        let left = 5.0 + (c.longitude - b.lon_min) / lon_span * 90.0;
                                        let top = 5.0 + (b.lat_max - c.latitude) / lat_span * 90.0;
                                        let size = 6.0 + (c.artif_total_ha / max_ha).sqrt() * 18.0;
                                        rsx! {
                                            div {
                                                key: "{c.code}",
                                                style: "
                                                    position: absolute;
                                                    left: calc({left}% - {size / 2.0}px);
                                                    top: calc({top}% - {size / 2.0}px);
                                                    width: {size}px;
                                                    height: {size}px;
                                                    border-radius: 50%;
                                                    background-color: {COLOR_HABITAT};
                                                    opacity: 0.75;
                                                ",
                                                title: "{c.nom} : {c.artif_total_ha:.1} ha",
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                },
            }
        }
    }
}
