//! Commune coordinates for the map panel.

use common::commune::CommuneCoords;
use common::filter_query::DashboardQuery;

use crate::api::evolution::round2;
use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

pub async fn communes_coords(query: DashboardQuery) -> anyhow::Result<Vec<CommuneCoords>> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_coords(&rows))
}

/// Rows without coordinates are skipped rather than plotted at 0,0.
pub(crate) fn compute_coords(rows: &[&CommuneRecord]) -> Vec<CommuneCoords> {
    rows.iter()
        .filter_map(|record| {
            let latitude = record.latitude?;
            let longitude = record.longitude?;
            Some(CommuneCoords {
                code: record.idcom.clone(),
                nom: record.idcomtxt.clone(),
                latitude,
                longitude,
                artif_total_ha: round2(record.artif_total_ha()),
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
    fn missing_coordinates_are_skipped() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let coords = compute_coords(&rows);
        // Andance carries no coordinates in the fixture
        assert_eq!(coords.len(), 2);
        assert!(coords.iter().all(|c| c.nom != "Andance"));
    }
}
