//! Commune table, map coordinates and data-freshness payloads.

use serde::{Deserialize, Serialize};

/// One row of the commune table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CommuneRow {
    /// INSEE code.
    pub code: String,
    pub nom: String,
    pub departement: String,
    pub typologie: String,
    pub artif_total_ha: f64,
    pub habitat_ha: f64,
    pub activites_ha: f64,
    pub mixte_ha: f64,
    pub routes_ha: f64,
    pub population: i64,
    pub evolution_pop: i64,
    /// Artificialised share of the commune surface, percent.
    pub taux_artif: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CommuneCoords {
    pub code: String,
    pub nom: String,
    pub latitude: f64,
    pub longitude: f64,
    pub artif_total_ha: f64,
}

/// Data source attribution and freshness, shown in the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LastUpdate {
    /// DD/MM/YYYY.
    pub date: String,
    pub source: String,
    pub source_url: String,
    pub periode: String,
}
