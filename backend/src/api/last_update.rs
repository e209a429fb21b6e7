//! Data freshness endpoint.

use common::commune::LastUpdate;
use common::filter_query::DashboardQuery;

use crate::data::metadata;

pub async fn last_update(_query: DashboardQuery) -> anyhow::Result<LastUpdate> {
    Ok(metadata::last_update())
}
