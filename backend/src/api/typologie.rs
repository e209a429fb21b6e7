//! Aggregates by AAV territorial typology.

use std::collections::BTreeMap;

use common::chart_data::{TYPOLOGIE_LABELS, TypologieRow};
use common::filter_query::DashboardQuery;

use crate::api::evolution::round2;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

pub async fn typologie(query: DashboardQuery) -> anyhow::Result<Vec<TypologieRow>> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_typologie(&rows))
}

#[derive(Default)]
struct Bucket {
    total: f64,
    habitat: f64,
    activites: f64,
    mixte: f64,
    routes: f64,
    pop1521: f64,
}

pub(crate) fn compute_typologie(rows: &[&CommuneRecord]) -> Vec<TypologieRow> {
    let mut buckets: BTreeMap<&'static str, Bucket> = BTreeMap::new();
    for record in rows {
        let bucket = buckets.entry(record.typologie()).or_default();
        bucket.total += record.naf09art24;
        bucket.habitat += record.art09hab24;
        bucket.activites += record.art09act24;
        bucket.mixte += record.art09mix24;
        bucket.routes += record.art09rou24;
        bucket.pop1521 += record.pop1521;
    }

    // fixed display order rather than alphabetical
    TYPOLOGIE_LABELS
        .iter()
        .filter_map(|label| {
            let bucket = buckets.remove(*label)?;
            let efficience = if bucket.pop1521 > 0.0 {
                (bucket.total / bucket.pop1521).round()
            } else {
                0.0
            };
            Some(TypologieRow {
                typologie: label.to_string(),
                total: round2(bucket.total / 10_000.0),
                habitat: round2(bucket.habitat / 10_000.0),
                activites: round2(bucket.activites / 10_000.0),
                mixte: round2(bucket.mixte / 10_000.0),
                routes: round2(bucket.routes / 10_000.0),
                efficience,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::FilterSet;

    #[test]
    fn groups_by_typology_label_in_display_order() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let data = compute_typologie(&rows);
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].typologie, "Petites/moyennes aires");
        assert_eq!(data[1].typologie, "Hors attraction (rural)");

        // P/M aires: Anneyron 300k + Andance 100k m² => 40 ha
        assert_eq!(data[0].total, 40.0);
        // pop growth 200 - 50 = 150 => 400 000 m² / 150 hab rounded
        assert_eq!(data[0].efficience, (400_000.0_f64 / 150.0).round());
        // rural: only Albon, growth 100 => 150k / 100
        assert_eq!(data[1].efficience, 1_500.0);
    }

    #[test]
    fn shrinking_typology_has_zero_efficiency() {
        let dataset = sample_dataset();
        let mut filters = FilterSet::new();
        filters.toggle_value(common::filter_query::FilterDimension::Commune, "Andance");
        let rows = dataset.filtered(&filters);
        let data = compute_typologie(&rows);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].efficience, 0.0);
    }
}
