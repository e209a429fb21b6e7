//! Dashboard endpoint handlers and module exports.

mod metrics;
pub use metrics::metrics;

mod trajectory;
pub use trajectory::trajectory;

mod evolution;
pub use evolution::evolution;

mod repartition;
pub use repartition::repartition;

mod top_communes;
pub use top_communes::top_communes;

mod typologie;
pub use typologie::typologie;

mod risques;
pub use risques::risques;

mod densification;
pub use densification::densification;

mod benchmark;
pub use benchmark::benchmark;

mod communes;
pub use communes::communes;

mod communes_coords;
pub use communes_coords::communes_coords;

mod filter_options;
pub use filter_options::filter_options;

mod last_update;
pub use last_update::last_update;
