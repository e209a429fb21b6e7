//! Annual consumption series.

use common::chart_data::EvolutionData;
use common::filter_query::DashboardQuery;

use crate::data::dataset::{ANNUAL_PERIODS, CommuneRecord};
use crate::data::get_datasets;

pub async fn evolution(query: DashboardQuery) -> anyhow::Result<EvolutionData> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_evolution(&rows))
}

pub(crate) fn compute_evolution(rows: &[&CommuneRecord]) -> EvolutionData {
    let mut periodes = Vec::with_capacity(ANNUAL_PERIODS.len());
    let mut consommations = Vec::with_capacity(ANNUAL_PERIODS.len());
    for (index, (_, label)) in ANNUAL_PERIODS.iter().enumerate() {
        let total_m2: f64 = rows.iter().map(|r| r.annual()[index]).sum();
        periodes.push(label.to_string());
        consommations.push(round2(total_m2 / 10_000.0));
    }
    EvolutionData {
        periodes,
        consommations,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::FilterSet;

    #[test]
    fn one_entry_per_period_in_order() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let data = compute_evolution(&rows);
        assert_eq!(data.periodes.len(), 15);
        assert_eq!(data.periodes.first().unwrap(), "2009-10");
        assert_eq!(data.periodes.last().unwrap(), "2023-24");
        // 2011-12: 10k (Albon) + 30k (Anneyron) m² => 4 ha
        assert_eq!(data.consommations[2], 4.0);
        // untouched periods sum to zero
        assert_eq!(data.consommations[0], 0.0);
    }
}
