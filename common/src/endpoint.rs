//! Names of the server endpoints the dashboard consumes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Metrics,
    Trajectory,
    Evolution,
    Repartition,
    TopCommunes,
    Typologie,
    Risques,
    Densification,
    Benchmark,
    Communes,
    FilterOptions,
    CommunesCoords,
    LastUpdate,
}

impl Endpoint {
    /// Everything fetched on a full dashboard reload, minus the two
    /// KPI payloads that must settle first.
    pub const CHART_BATCH: [Endpoint; 10] = [
        Endpoint::Evolution,
        Endpoint::Repartition,
        Endpoint::TopCommunes,
        Endpoint::Typologie,
        Endpoint::Risques,
        Endpoint::Densification,
        Endpoint::Benchmark,
        Endpoint::Communes,
        Endpoint::CommunesCoords,
        Endpoint::LastUpdate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Metrics => "metrics",
            Endpoint::Trajectory => "trajectory",
            Endpoint::Evolution => "evolution",
            Endpoint::Repartition => "repartition",
            Endpoint::TopCommunes => "top-communes",
            Endpoint::Typologie => "typologie",
            Endpoint::Risques => "risques",
            Endpoint::Densification => "densification",
            Endpoint::Benchmark => "benchmark",
            Endpoint::Communes => "communes",
            Endpoint::FilterOptions => "filter-options",
            Endpoint::CommunesCoords => "communes-coords",
            Endpoint::LastUpdate => "last-update",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
