//! Server-side data loading and per-endpoint compute.

pub mod data;
pub mod api;
pub mod server_extra;
