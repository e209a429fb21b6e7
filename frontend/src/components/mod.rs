pub mod charts;
pub mod commune_table;
pub mod error_boundary;
pub mod filter_components;
pub mod kpi_cards;
pub mod loading;
pub mod map_panel;
pub mod sidebar;
pub mod tabs;
pub mod top_bar;
