//! Full commune table.

use common::commune::CommuneRow;
use common::filter_query::DashboardQuery;

use crate::api::evolution::round2;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

pub async fn communes(query: DashboardQuery) -> anyhow::Result<Vec<CommuneRow>> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_communes(&rows))
}

pub(crate) fn compute_communes(rows: &[&CommuneRecord]) -> Vec<CommuneRow> {
    let mut table: Vec<CommuneRow> = rows.iter().map(|record| commune_row(record)).collect();
    table.sort_by(|a, b| a.nom.cmp(&b.nom));
    table
}

pub(crate) fn commune_row(record: &CommuneRecord) -> CommuneRow {
    let taux_artif = if record.surfcom2024 > 0.0 {
        record.naf09art24 / record.surfcom2024 * 100.0
    } else {
        0.0
    };
    CommuneRow {
        code: record.idcom.clone(),
        nom: record.idcomtxt.clone(),
        departement: record.departement().to_string(),
        typologie: record.typologie().to_string(),
        artif_total_ha: round2(record.artif_total_ha()),
        habitat_ha: round2(record.art09hab24 / 10_000.0),
        activites_ha: round2(record.art09act24 / 10_000.0),
        mixte_ha: round2(record.art09mix24 / 10_000.0),
        routes_ha: round2(record.art09rou24 / 10_000.0),
        population: record.pop21 as i64,
        evolution_pop: record.pop1521 as i64,
        taux_artif: round2(taux_artif),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::{FilterDimension, FilterSet};

    #[test]
    fn rows_are_sorted_by_name() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let table = compute_communes(&rows);
        let names: Vec<&str> = table.iter().map(|r| r.nom.as_str()).collect();
        assert_eq!(names, vec!["Albon", "Andance", "Anneyron"]);
    }

    #[test]
    fn row_figures() {
        let dataset = sample_dataset();
        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Commune, "Albon");
        let rows = dataset.filtered(&filters);
        let table = compute_communes(&rows);
        let albon = &table[0];
        assert_eq!(albon.code, "26002");
        assert_eq!(albon.departement, "26");
        assert_eq!(albon.typologie, "Hors attraction (rural)");
        assert_eq!(albon.artif_total_ha, 15.0);
        assert_eq!(albon.habitat_ha, 8.0);
        assert_eq!(albon.population, 2_000);
        // 150 000 m² of 20 000 000 m² surface => 0.75 %
        assert_eq!(albon.taux_artif, 0.75);
    }
}
