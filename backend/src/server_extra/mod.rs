//! Plain axum routes mounted beside the server functions.

pub mod export_communes;
