//! Most artificialised communes, stacked by destination.

use common::chart_data::TopCommuneRow;
use common::filter_query::DashboardQuery;

use crate::api::evolution::round2;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

const TOP_N: usize = 10;

pub async fn top_communes(query: DashboardQuery) -> anyhow::Result<Vec<TopCommuneRow>> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_top_communes(&rows, TOP_N))
}

pub(crate) fn compute_top_communes(rows: &[&CommuneRecord], n: usize) -> Vec<TopCommuneRow> {
    let mut sorted: Vec<&&CommuneRecord> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        b.artif_total_ha()
            .partial_cmp(&a.artif_total_ha())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);

    // Destination columns are m² in recent files but some older extracts
    // already carry hectares; only rescale when the magnitude says m².
    let needs_rescale = |field: fn(&CommuneRecord) -> f64| {
        sorted
            .iter()
            .map(|r| field(r))
            .fold(0.0_f64, f64::max)
            > 1_000.0
    };
    let scale = |value: f64, rescale: bool| {
        if rescale { value / 10_000.0 } else { value }
    };
    let rescale_hab = needs_rescale(|r| r.art09hab24);
    let rescale_act = needs_rescale(|r| r.art09act24);
    let rescale_mix = needs_rescale(|r| r.art09mix24);
    let rescale_rou = needs_rescale(|r| r.art09rou24);

    sorted
        .into_iter()
        .map(|record| TopCommuneRow {
            commune: record.idcomtxt.clone(),
            total: round2(record.artif_total_ha()),
            habitat: round2(scale(record.art09hab24, rescale_hab)),
            activites: round2(scale(record.art09act24, rescale_act)),
            mixte: round2(scale(record.art09mix24, rescale_mix)),
            routes: round2(scale(record.art09rou24, rescale_rou)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::FilterSet;

    #[test]
    fn sorted_by_total_and_truncated() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let top = compute_top_communes(&rows, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].commune, "Anneyron");
        assert_eq!(top[0].total, 30.0);
        assert_eq!(top[1].commune, "Albon");
    }

    #[test]
    fn destination_columns_are_rescaled_to_hectares() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let top = compute_top_communes(&rows, 10);
        // Anneyron: 150 000 m² habitat => 15 ha
        assert_eq!(top[0].habitat, 15.0);
        assert_eq!(top[0].routes, 3.0);
    }
}
