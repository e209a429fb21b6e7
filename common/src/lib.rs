//! Shared models and the filter/cache core, used by frontend and backend.

extern crate serde;


pub mod perimeter;
pub mod filter_query;
pub mod catalog;
pub mod endpoint;
pub mod query_cache;
pub mod dashboard_state;
pub mod gateway;
pub mod filter_controller;
pub mod metrics;
pub mod chart_data;
pub mod commune;
