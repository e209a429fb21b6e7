//! Payload shapes for the chart endpoints.

use serde::{Deserialize, Serialize};

/// Annual consumption series, one entry per NAF period ("2009-10" …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvolutionData {
    pub periodes: Vec<String>,
    pub consommations: Vec<f64>,
}

impl EvolutionData {
    pub fn moyenne(&self) -> f64 {
        if self.consommations.is_empty() {
            return 0.0;
        }
        self.consommations.iter().sum::<f64>() / self.consommations.len() as f64
    }
}

/// Consumption split by destination, hectares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RepartitionData {
    pub habitat: f64,
    pub activites: f64,
    pub mixte: f64,
    pub routes: f64,
}

impl RepartitionData {
    pub fn total(&self) -> f64 {
        self.habitat + self.activites + self.mixte + self.routes
    }

    /// (label, value) pairs in display order.
    pub fn slices(&self) -> [(&'static str, f64); 4] {
        [
            ("Habitat", self.habitat),
            ("Activités", self.activites),
            ("Mixte", self.mixte),
            ("Routes", self.routes),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TopCommuneRow {
    pub commune: String,
    pub total: f64,
    pub habitat: f64,
    pub activites: f64,
    pub mixte: f64,
    pub routes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TypologieRow {
    pub typologie: String,
    pub total: f64,
    pub habitat: f64,
    pub activites: f64,
    pub mixte: f64,
    pub routes: f64,
    /// m² consumed per new inhabitant within the typology.
    pub efficience: f64,
}

/// Conformity badge shown on the typology synthesis cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficienceStatus {
    Conforme,
    Vigilance,
    Critique,
}

impl EfficienceStatus {
    /// 200 m²/inhabitant is the target, above 500 the typology is off track.
    pub fn from_efficience(m2_par_habitant: f64) -> Self {
        if m2_par_habitant <= 200.0 {
            EfficienceStatus::Conforme
        } else if m2_par_habitant <= 500.0 {
            EfficienceStatus::Vigilance
        } else {
            EfficienceStatus::Critique
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EfficienceStatus::Conforme => "Conforme",
            EfficienceStatus::Vigilance => "Vigilance",
            EfficienceStatus::Critique => "Critique",
        }
    }
}

/// Per-commune envelope projection: the 50 % rule applied commune by commune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RisqueRow {
    pub commune: String,
    pub enveloppe_ha: f64,
    pub conso_2021_2024: f64,
    pub taux_enveloppe: f64,
    pub statut: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RisquesData {
    pub nb_conforme: u64,
    pub nb_vigilance: u64,
    pub nb_alerte: u64,
    /// Worst offenders, highest envelope usage first.
    pub communes: Vec<RisqueRow>,
}

/// Consumption efficiency per commune (growth communes only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DensificationRow {
    pub commune: String,
    pub conso_ha: f64,
    pub evolution_pop: i64,
    pub m2_par_habitant: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DensificationData {
    /// Mean m² per new inhabitant over growth communes.
    pub moyenne_m2_par_habitant: f64,
    pub nb_communes_croissance: u64,
    /// Least efficient communes first.
    pub communes: Vec<DensificationRow>,
}

/// One perimeter in the cross-perimeter comparison (always unfiltered).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchmarkRow {
    pub perimetre: String,
    pub nb_communes: u64,
    pub artif_total_ha: f64,
    pub population: i64,
    pub conso_par_hab: f64,
    pub taux_enveloppe: f64,
}

/// Label for an AAV 2020 typology code. Codes outside the known four are
/// grouped under "Autre", as the source data occasionally carries them.
pub fn typologie_label(code: &str) -> &'static str {
    match code {
        "11" => "Pôles principaux",
        "12" => "Couronnes grandes aires",
        "20" => "Petites/moyennes aires",
        "30" => "Hors attraction (rural)",
        _ => "Autre",
    }
}

/// Display order of the typology labels.
pub const TYPOLOGIE_LABELS: [&str; 5] = [
    "Pôles principaux",
    "Couronnes grandes aires",
    "Petites/moyennes aires",
    "Hors attraction (rural)",
    "Autre",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evolution_moyenne() {
        let data = EvolutionData {
            periodes: vec!["2009-10".into(), "2010-11".into()],
            consommations: vec![10.0, 20.0],
        };
        assert_eq!(data.moyenne(), 15.0);
        assert_eq!(EvolutionData::default().moyenne(), 0.0);
    }

    #[test]
    fn efficience_badges() {
        assert_eq!(EfficienceStatus::from_efficience(150.0), EfficienceStatus::Conforme);
        assert_eq!(EfficienceStatus::from_efficience(200.0), EfficienceStatus::Conforme);
        assert_eq!(EfficienceStatus::from_efficience(350.0), EfficienceStatus::Vigilance);
        assert_eq!(EfficienceStatus::from_efficience(501.0), EfficienceStatus::Critique);
    }

    #[test]
    fn typologie_codes_map_to_labels() {
        assert_eq!(typologie_label("11"), "Pôles principaux");
        assert_eq!(typologie_label("30"), "Hors attraction (rural)");
        assert_eq!(typologie_label("99"), "Autre");
        assert_eq!(typologie_label(""), "Autre");
    }
}
