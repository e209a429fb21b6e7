//! Option catalogs for the filter dropdowns.

use std::collections::BTreeSet;

use common::catalog::FilterOptions;
use common::chart_data::TYPOLOGIE_LABELS;
use common::filter_query::{DashboardQuery, FilterDimension, FilterSet};

use crate::data::dataset::{CommuneRecord, Dataset};
use crate::data::get_datasets;

pub async fn filter_options(query: DashboardQuery) -> anyhow::Result<FilterOptions> {
    let datasets = get_datasets()?;
    Ok(compute_filter_options(datasets.get(query.perimeter), &query.filters))
}

/// Departments and typologies depend only on the perimeter; the commune list
/// is scoped to the department selection so the dropdown never offers a
/// commune the current department filter would exclude.
pub(crate) fn compute_filter_options(dataset: &Dataset, filters: &FilterSet) -> FilterOptions {
    let departements: BTreeSet<String> = dataset
        .records
        .iter()
        .map(|r| r.departement().to_string())
        .collect();

    let in_departments = |record: &CommuneRecord| {
        filters.matches(FilterDimension::Department, record.departement())
    };
    let communes: BTreeSet<String> = dataset
        .records
        .iter()
        .filter(|r| in_departments(r))
        .map(|r| r.idcomtxt.clone())
        .collect();

    let present: BTreeSet<&str> = dataset.records.iter().map(|r| r.typologie()).collect();
    let typologies: Vec<String> = TYPOLOGIE_LABELS
        .iter()
        .filter(|label| present.contains(**label))
        .map(|label| label.to_string())
        .collect();

    FilterOptions {
        departements: departements.into_iter().collect(),
        communes: communes.into_iter().collect(),
        typologies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;

    #[test]
    fn departments_and_typologies_ignore_the_selection() {
        let dataset = sample_dataset();
        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Department, "26");
        let options = compute_filter_options(&dataset, &filters);
        assert_eq!(options.departements, vec!["07", "26"]);
        assert_eq!(
            options.typologies,
            vec!["Petites/moyennes aires", "Hors attraction (rural)"]
        );
    }

    #[test]
    fn communes_are_scoped_to_the_department_selection() {
        let dataset = sample_dataset();

        let all = compute_filter_options(&dataset, &FilterSet::new());
        assert_eq!(all.communes, vec!["Albon", "Andance", "Anneyron"]);

        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Department, "26");
        let scoped = compute_filter_options(&dataset, &filters);
        assert_eq!(scoped.communes, vec!["Albon", "Anneyron"]);
    }
}
