//! Messages the view sends to the dashboard coroutine.

use common::filter_query::{FilterChoice, FilterDimension};
use common::perimeter::Perimeter;

/// One user action. The coroutine applies them one at a time, so a click can
/// never interleave with the cache invalidation of the previous click.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    SetPerimeter(Perimeter),
    ToggleFilter(FilterDimension, FilterChoice),
    Reload,
}
