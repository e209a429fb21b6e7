//! ZAN trajectory gauge.

use common::filter_query::DashboardQuery;
use common::metrics::{TrajectoryData, TrajectoryStatus};

use crate::api::metrics::compute_metrics;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

pub async fn trajectory(query: DashboardQuery) -> anyhow::Result<TrajectoryData> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_trajectory(query, &rows))
}

pub(crate) fn compute_trajectory(query: DashboardQuery, rows: &[&CommuneRecord]) -> TrajectoryData {
    let metrics = compute_metrics(query.perimeter, rows);
    TrajectoryData {
        conso_reference: metrics.conso_reference,
        enveloppe_zan: metrics.enveloppe_zan,
        conso_2021_2024: metrics.conso_2021_2024,
        reste_disponible: metrics.reste_disponible,
        taux_enveloppe: metrics.taux_enveloppe,
        statut: TrajectoryStatus::from_rate(metrics.taux_enveloppe),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::FilterSet;
    use common::perimeter::Perimeter;

    #[test]
    fn status_follows_the_envelope_rate() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let t = compute_trajectory(
            DashboardQuery::new(Perimeter::Scot, FilterSet::new()),
            &rows,
        );
        // 4.2 of 4.5 ha consumed: way past the 50 % alert threshold
        assert!(t.taux_enveloppe > 50.0);
        assert_eq!(t.statut, TrajectoryStatus::Alerte);
    }
}
