//! Data source attribution and freshness.

use chrono::{DateTime, Local};
use common::commune::LastUpdate;

use crate::data::dataset::{SCOT_FILE, get_datasets};

pub const DATA_SOURCE: &str = "Observatoire de l'artificialisation des sols";
pub const DATA_SOURCE_URL: &str = "https://artificialisation.biodiversite.gouv.fr";
pub const DATA_PERIOD: &str = "2009-2024";

/// Modification date of the SCoT data file, DD/MM/YYYY. Falls back to today
/// when the file cannot be stat'ed.
pub fn data_last_update() -> String {
    let stamp = get_datasets()
        .ok()
        .map(|datasets| datasets.data_dir().join(SCOT_FILE))
        .and_then(|path| std::fs::metadata(path).ok())
        .and_then(|meta| meta.modified().ok());
    let date: DateTime<Local> = match stamp {
        Some(modified) => modified.into(),
        None => Local::now(),
    };
    date.format("%d/%m/%Y").to_string()
}

pub fn last_update() -> LastUpdate {
    LastUpdate {
        date: data_last_update(),
        source: DATA_SOURCE.to_string(),
        source_url: DATA_SOURCE_URL.to_string(),
        periode: DATA_PERIOD.to_string(),
    }
}
