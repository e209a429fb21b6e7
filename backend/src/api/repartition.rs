//! Consumption split by destination.

use common::chart_data::RepartitionData;
use common::filter_query::DashboardQuery;

use crate::api::evolution::round2;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

pub async fn repartition(query: DashboardQuery) -> anyhow::Result<RepartitionData> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_repartition(&rows))
}

pub(crate) fn compute_repartition(rows: &[&CommuneRecord]) -> RepartitionData {
    let sum_ha = |field: fn(&CommuneRecord) -> f64| {
        round2(rows.iter().map(|r| field(r)).sum::<f64>() / 10_000.0)
    };
    RepartitionData {
        habitat: sum_ha(|r| r.art09hab24),
        activites: sum_ha(|r| r.art09act24),
        mixte: sum_ha(|r| r.art09mix24),
        routes: sum_ha(|r| r.art09rou24),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::FilterSet;

    #[test]
    fn destination_totals() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let data = compute_repartition(&rows);
        assert_eq!(data.habitat, 28.0);
        assert_eq!(data.activites, 17.0);
        assert_eq!(data.mixte, 3.5);
        assert_eq!(data.routes, 6.5);
        assert_eq!(data.total(), 55.0);
    }
}
