//! Consumption efficiency per commune.

use common::chart_data::{DensificationData, DensificationRow};
use common::filter_query::DashboardQuery;

use crate::api::evolution::round2;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

const LEAST_EFFICIENT_N: usize = 10;

pub async fn densification(query: DashboardQuery) -> anyhow::Result<DensificationData> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_densification(&rows))
}

/// m² consumed per new inhabitant, for communes that actually grew between
/// 2015 and 2021. Shrinking communes have no meaningful ratio and are left
/// out entirely.
pub(crate) fn compute_densification(rows: &[&CommuneRecord]) -> DensificationData {
    let mut communes: Vec<DensificationRow> = rows
        .iter()
        .filter(|record| record.pop1521 > 0.0)
        .map(|record| DensificationRow {
            commune: record.idcomtxt.clone(),
            conso_ha: round2(record.artif_total_ha()),
            evolution_pop: record.pop1521 as i64,
            m2_par_habitant: (record.naf09art24 / record.pop1521).round(),
        })
        .collect();

    communes.sort_by(|a, b| {
        b.m2_par_habitant
            .partial_cmp(&a.m2_par_habitant)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let nb_communes_croissance = communes.len() as u64;
    let moyenne = if communes.is_empty() {
        0.0
    } else {
        communes.iter().map(|c| c.m2_par_habitant).sum::<f64>() / communes.len() as f64
    };

    communes.truncate(LEAST_EFFICIENT_N);
    DensificationData {
        moyenne_m2_par_habitant: moyenne.round(),
        nb_communes_croissance,
        communes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::FilterSet;

    #[test]
    fn shrinking_communes_are_excluded() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let data = compute_densification(&rows);
        assert_eq!(data.nb_communes_croissance, 2);
        assert!(data.communes.iter().all(|c| c.commune != "Andance"));
    }

    #[test]
    fn least_efficient_first() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let data = compute_densification(&rows);
        // Albon: 150 000 m² / 100 hab = 1500; Anneyron: 300 000 / 200 = 1500
        assert_eq!(data.communes[0].m2_par_habitant, 1_500.0);
        assert_eq!(data.moyenne_m2_par_habitant, 1_500.0);
    }
}
