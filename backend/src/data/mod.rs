//! Dataset loading and metadata.

pub mod dataset;
pub mod metadata;

pub use dataset::{CommuneRecord, Dataset, Datasets, get_datasets};
