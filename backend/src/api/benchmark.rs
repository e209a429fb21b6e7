//! Cross-perimeter comparison.

use common::chart_data::BenchmarkRow;
use common::filter_query::{DashboardQuery, FilterSet};
use common::metrics::Metrics;
use common::perimeter::Perimeter;

use crate::api::metrics::compute_metrics;
use crate::data::get_datasets;

/// Compares the two perimeters side by side. Always computed over the full,
/// unfiltered datasets: the comparison is between territories, not between
/// filtered slices of them.
pub async fn benchmark(_query: DashboardQuery) -> anyhow::Result<Vec<BenchmarkRow>> {
    let datasets = get_datasets()?;
    let unfiltered = FilterSet::new();
    Ok(Perimeter::ALL
        .iter()
        .map(|&perimeter| {
            let rows = datasets.get(perimeter).filtered(&unfiltered);
            benchmark_row(compute_metrics(perimeter, &rows))
        })
        .collect())
}

pub(crate) fn benchmark_row(metrics: Metrics) -> BenchmarkRow {
    BenchmarkRow {
        perimetre: metrics.perimetre,
        nb_communes: metrics.nb_communes,
        artif_total_ha: metrics.artif_total_ha,
        population: metrics.population,
        conso_par_hab: metrics.conso_par_hab,
        taux_enveloppe: metrics.taux_enveloppe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;

    #[test]
    fn row_carries_the_comparison_figures() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let row = benchmark_row(compute_metrics(Perimeter::Ccpda, &rows));
        assert_eq!(row.perimetre, "CC Porte de DrômArdèche");
        assert_eq!(row.nb_communes, 3);
        assert!((row.artif_total_ha - 55.0).abs() < 1e-9);
    }
}
