//! CSV export of the filtered commune table.

use axum::body::Body;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::info;

use common::commune::CommuneRow;
use common::filter_query::{DashboardQuery, FilterDimension, FilterSet};
use common::perimeter::Perimeter;

use crate::api::communes;

/// Parses the dashboard's wire parameters: `perimetre` plus the repeated
/// `departements`/`communes`/`typologies` keys.
pub(crate) fn parse_query(raw: &str) -> anyhow::Result<DashboardQuery> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)?;
    let mut perimeter = Perimeter::default();
    let mut filters = FilterSet::new();
    for (key, value) in pairs {
        match key.as_str() {
            "perimetre" => perimeter = value.parse().map_err(anyhow::Error::msg)?,
            "departements" => filters.toggle_value(FilterDimension::Department, &value),
            "communes" => filters.toggle_value(FilterDimension::Commune, &value),
            "typologies" => filters.toggle_value(FilterDimension::Typology, &value),
            _ => {}
        }
    }
    Ok(DashboardQuery::new(perimeter, filters))
}

pub(crate) fn render_csv(rows: &[CommuneRow]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    writer.write_record([
        "code",
        "commune",
        "departement",
        "typologie",
        "artif_total_ha",
        "habitat_ha",
        "activites_ha",
        "mixte_ha",
        "routes_ha",
        "population",
        "evolution_pop",
        "taux_artif_pct",
    ])?;
    for row in rows {
        writer.write_record([
            row.code.clone(),
            row.nom.clone(),
            row.departement.clone(),
            row.typologie.clone(),
            format!("{:.2}", row.artif_total_ha),
            format!("{:.2}", row.habitat_ha),
            format!("{:.2}", row.activites_ha),
            format!("{:.2}", row.mixte_ha),
            format!("{:.2}", row.routes_ha),
            row.population.to_string(),
            row.evolution_pop.to_string(),
            format!("{:.2}", row.taux_artif),
        ])?;
    }
    Ok(writer.into_inner()?)
}

async fn _export_communes(raw_query: Option<String>) -> anyhow::Result<impl IntoResponse> {
    let query = parse_query(raw_query.as_deref().unwrap_or(""))?;
    info!(
        "exporting commune table: perimetre={} filters={}",
        query.perimeter,
        query.filters.canonical_key()
    );

    let rows = communes(query).await?;
    let body = render_csv(&rows)?;
    let headers = [
        ("Content-Type".to_string(), "text/csv; charset=utf-8".to_string()),
        (
            "Content-Disposition".to_string(),
            "attachment; filename=\"communes_zan.csv\"".to_string(),
        ),
    ];
    Ok((headers, Body::from(body)).into_response())
}

pub async fn export_communes(RawQuery(raw_query): RawQuery) -> Response {
    match _export_communes(raw_query).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("export_communes: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_query_handles_repeated_parameters() {
        let query =
            parse_query("perimetre=ccpda&departements=07&departements=26&communes=Albon").unwrap();
        assert_eq!(query.perimeter, Perimeter::Ccpda);
        assert_eq!(
            query.filters.canonical_key(),
            "departements=07,26&communes=Albon"
        );
    }

    #[test]
    fn parse_query_defaults_and_rejects_unknown_perimeters() {
        let query = parse_query("").unwrap();
        assert_eq!(query.perimeter, Perimeter::Scot);
        assert!(parse_query("perimetre=nope").is_err());
    }

    #[test]
    fn csv_is_semicolon_separated_with_header() {
        let rows = vec![CommuneRow {
            code: "26002".into(),
            nom: "Albon".into(),
            departement: "26".into(),
            typologie: "Hors attraction (rural)".into(),
            artif_total_ha: 15.0,
            habitat_ha: 8.0,
            activites_ha: 4.0,
            mixte_ha: 1.0,
            routes_ha: 2.0,
            population: 2000,
            evolution_pop: 100,
            taux_artif: 0.75,
        }];
        let bytes = render_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("code;commune;departement"));
        assert_eq!(
            lines.next().unwrap(),
            "26002;Albon;26;Hors attraction (rural);15.00;8.00;4.00;1.00;2.00;2000;100;0.75"
        );
    }
}
