pub mod commands;
pub mod server_gateway;
pub mod view_state;
