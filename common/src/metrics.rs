//! KPI metrics and trajectory payloads.

use serde::{Deserialize, Serialize};

/// Headline figures for the current perimeter and filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Metrics {
    /// Perimeter display label, e.g. "SCoT des Rives du Rhône".
    pub perimetre: String,
    pub nb_communes: u64,
    /// Total artificialised surface 2009-2024, hectares.
    pub artif_total_ha: f64,
    pub artif_habitat_ha: f64,
    pub artif_activites_ha: f64,
    pub artif_mixte_ha: f64,
    pub artif_routes_ha: f64,
    pub population: i64,
    pub evolution_pop: i64,
    /// m² consumed per new inhabitant (0 when population shrank).
    pub conso_par_hab: f64,
    /// Reference consumption 2011-2021, hectares.
    pub conso_reference: f64,
    /// ZAN envelope: half the reference consumption.
    pub enveloppe_zan: f64,
    pub conso_2021_2024: f64,
    pub reste_disponible: f64,
    /// Share of the envelope already consumed, percent.
    pub taux_enveloppe: f64,
}

/// Trajectory status derived from the envelope usage rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrajectoryStatus {
    Conforme,
    Vigilance,
    Alerte,
}

impl TrajectoryStatus {
    /// Thresholds shown on the status card: below 30 % of the envelope the
    /// trajectory is on track, below 50 % it needs watching, above it is not.
    pub fn from_rate(taux_enveloppe: f64) -> Self {
        if taux_enveloppe < 30.0 {
            TrajectoryStatus::Conforme
        } else if taux_enveloppe < 50.0 {
            TrajectoryStatus::Vigilance
        } else {
            TrajectoryStatus::Alerte
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrajectoryStatus::Conforme => "CONFORME",
            TrajectoryStatus::Vigilance => "VIGILANCE",
            TrajectoryStatus::Alerte => "ALERTE",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TrajectoryStatus::Conforme => "#48BB78",
            TrajectoryStatus::Vigilance => "#ED8936",
            TrajectoryStatus::Alerte => "#F56565",
        }
    }
}

/// Gauge payload for the ZAN trajectory panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryData {
    pub conso_reference: f64,
    pub enveloppe_zan: f64,
    pub conso_2021_2024: f64,
    pub reste_disponible: f64,
    pub taux_enveloppe: f64,
    pub statut: TrajectoryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(TrajectoryStatus::from_rate(0.0), TrajectoryStatus::Conforme);
        assert_eq!(TrajectoryStatus::from_rate(29.9), TrajectoryStatus::Conforme);
        assert_eq!(TrajectoryStatus::from_rate(30.0), TrajectoryStatus::Vigilance);
        assert_eq!(TrajectoryStatus::from_rate(49.9), TrajectoryStatus::Vigilance);
        assert_eq!(TrajectoryStatus::from_rate(50.0), TrajectoryStatus::Alerte);
        assert_eq!(TrajectoryStatus::from_rate(120.0), TrajectoryStatus::Alerte);
    }
}
