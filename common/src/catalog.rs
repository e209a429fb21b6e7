//! Server-confirmed option lists per filter dimension.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_query::FilterDimension;

/// Valid values per dimension, in server order, for the current perimeter and
/// upstream filters. The commune list is derived from the department
/// selection; the other two depend on the perimeter alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OptionCatalog {
    options: BTreeMap<FilterDimension, Vec<String>>,
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self, dimension: FilterDimension) -> &[String] {
        self.options.get(&dimension).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn replace(&mut self, dimension: FilterDimension, options: Vec<String>) {
        self.options.insert(dimension, options);
    }
}

/// Payload of the `filter-options` endpoint: all three lists in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterOptions {
    pub departements: Vec<String>,
    pub communes: Vec<String>,
    pub typologies: Vec<String>,
}

impl FilterOptions {
    pub fn for_dimension(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Department => &self.departements,
            FilterDimension::Commune => &self.communes,
            FilterDimension::Typology => &self.typologies,
        }
    }
}
