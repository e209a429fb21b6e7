//! Headline KPI metrics.

use common::filter_query::DashboardQuery;
use common::metrics::Metrics;
use common::perimeter::Perimeter;

use crate::data::dataset::CommuneRecord;
use crate::data::get_datasets;

pub async fn metrics(query: DashboardQuery) -> anyhow::Result<Metrics> {
    let datasets = get_datasets()?;
    let rows = datasets.get(query.perimeter).filtered(&query.filters);
    Ok(compute_metrics(query.perimeter, &rows))
}

pub(crate) fn compute_metrics(perimeter: Perimeter, rows: &[&CommuneRecord]) -> Metrics {
    let to_ha = |m2: f64| m2 / 10_000.0;

    let artif_total_ha = to_ha(rows.iter().map(|r| r.naf09art24).sum());
    let evolution_pop = rows.iter().map(|r| r.pop1521).sum::<f64>() as i64;

    let conso_par_hab = if evolution_pop > 0 {
        (artif_total_ha * 10_000.0) / evolution_pop as f64
    } else {
        0.0
    };

    let conso_reference = to_ha(rows.iter().map(|r| r.conso_reference()).sum());
    let enveloppe_zan = conso_reference * 0.5;
    let conso_2021_2024 = to_ha(rows.iter().map(|r| r.conso_recente()).sum());
    let taux_enveloppe = if enveloppe_zan > 0.0 {
        conso_2021_2024 / enveloppe_zan * 100.0
    } else {
        0.0
    };

    Metrics {
        perimetre: perimeter.display_name().to_string(),
        nb_communes: rows.len() as u64,
        artif_total_ha,
        artif_habitat_ha: to_ha(rows.iter().map(|r| r.art09hab24).sum()),
        artif_activites_ha: to_ha(rows.iter().map(|r| r.art09act24).sum()),
        artif_mixte_ha: to_ha(rows.iter().map(|r| r.art09mix24).sum()),
        artif_routes_ha: to_ha(rows.iter().map(|r| r.art09rou24).sum()),
        population: rows.iter().map(|r| r.pop21).sum::<f64>() as i64,
        evolution_pop,
        conso_par_hab,
        conso_reference,
        enveloppe_zan,
        conso_2021_2024,
        reste_disponible: (enveloppe_zan - conso_2021_2024).max(0.0),
        taux_enveloppe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::test_fixtures::sample_dataset;
    use common::filter_query::{FilterDimension, FilterSet};

    #[test]
    fn totals_and_envelope() {
        let dataset = sample_dataset();
        let rows = dataset.filtered(&FilterSet::new());
        let m = compute_metrics(Perimeter::Scot, &rows);

        assert_eq!(m.nb_communes, 3);
        assert_eq!(m.perimetre, "SCoT des Rives du Rhône");
        // 150k + 300k + 100k m² => 55 ha
        assert!((m.artif_total_ha - 55.0).abs() < 1e-9);
        assert_eq!(m.population, 7_200);
        assert_eq!(m.evolution_pop, 250);

        // reference: 30k + 40k + 20k m² => 9 ha; envelope 4.5 ha
        assert!((m.conso_reference - 9.0).abs() < 1e-9);
        assert!((m.enveloppe_zan - 4.5).abs() < 1e-9);
        // recent: 10k + 30k + 2k m² => 4.2 ha
        assert!((m.conso_2021_2024 - 4.2).abs() < 1e-9);
        assert!((m.reste_disponible - 0.3).abs() < 1e-9);
        assert!((m.taux_enveloppe - 4.2 / 4.5 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn shrinking_population_zeroes_the_per_capita_figure() {
        let dataset = sample_dataset();
        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Commune, "Andance");
        let rows = dataset.filtered(&filters);
        let m = compute_metrics(Perimeter::Scot, &rows);
        assert_eq!(m.evolution_pop, -50);
        assert_eq!(m.conso_par_hab, 0.0);
    }

    #[test]
    fn empty_selection_yields_zeroed_metrics() {
        let m = compute_metrics(Perimeter::Ccpda, &[]);
        assert_eq!(m.nb_communes, 0);
        assert_eq!(m.artif_total_ha, 0.0);
        assert_eq!(m.taux_enveloppe, 0.0);
    }
}
