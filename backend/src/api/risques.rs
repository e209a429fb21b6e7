//! Per-commune envelope projection.

use common::chart_data::{RisqueRow, RisquesData};
use common::filter_query::DashboardQuery;
use common::metrics::TrajectoryStatus;

use crate::api::evolution::round2;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

const WORST_N: usize = 15;

pub async fn risques(query: DashboardQuery) -> anyhow::Result<RisquesData> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_risques(&rows))
}

/// Applies the 50 % envelope rule commune by commune: each commune's envelope
/// is half its own 2011-2021 consumption, compared against its 2021-2024
/// consumption. Communes with no reference consumption get no envelope and
/// are flagged as alert as soon as they consume anything.
pub(crate) fn compute_risques(rows: &[&CommuneRecord]) -> RisquesData {
    let mut communes: Vec<RisqueRow> = rows
        .iter()
        .map(|record| {
            let enveloppe_ha = record.conso_reference() * 0.5 / 10_000.0;
            let conso_2021_2024 = record.conso_recente() / 10_000.0;
            let taux_enveloppe = if enveloppe_ha > 0.0 {
                conso_2021_2024 / enveloppe_ha * 100.0
            } else if conso_2021_2024 > 0.0 {
                100.0
            } else {
                0.0
            };
            RisqueRow {
                commune: record.idcomtxt.clone(),
                enveloppe_ha: round2(enveloppe_ha),
                conso_2021_2024: round2(conso_2021_2024),
                taux_enveloppe: round2(taux_enveloppe),
                statut: TrajectoryStatus::from_rate(taux_enveloppe).label().to_string(),
            }
        })
        .collect();

    communes.sort_by(|a, b| {
        b.taux_enveloppe
            .partial_cmp(&a.taux_enveloppe)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let count_with = |label: &str| communes.iter().filter(|c| c.statut == label).count() as u64;
    let nb_conforme = count_with(TrajectoryStatus::Conforme.label());
    let nb_vigilance = count_with(TrajectoryStatus::Vigilance.label());
    let nb_alerte = count_with(TrajectoryStatus::Alerte.label());

    communes.truncate(WORST_N);
    RisquesData {
        nb_conforme,
        nb_vigilance,
        nb_alerte,
        communes,
    }
}
