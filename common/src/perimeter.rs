//! Perimeter selector shared between frontend and backend.

use serde::{Deserialize, Serialize};

/// Top-level scope selector: which territorial aggregate the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Perimeter {
    #[default]
    Scot,
    Ccpda,
}

impl Perimeter {
    pub const ALL: [Perimeter; 2] = [Perimeter::Scot, Perimeter::Ccpda];

    pub fn as_str(self) -> &'static str {
        match self {
            Perimeter::Scot => "scot",
            Perimeter::Ccpda => "ccpda",
        }
    }

    /// Short label shown in the mobile header.
    pub fn short_label(self) -> &'static str {
        match self {
            Perimeter::Scot => "SCOT",
            Perimeter::Ccpda => "CCPDA",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Perimeter::Scot => "SCoT des Rives du Rhône",
            Perimeter::Ccpda => "CC Porte de DrômArdèche",
        }
    }
}

impl std::str::FromStr for Perimeter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scot" => Ok(Perimeter::Scot),
            "ccpda" => Ok(Perimeter::Ccpda),
            other => Err(format!("unknown perimeter: {other:?}")),
        }
    }
}

impl std::fmt::Display for Perimeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
