//! The network collaborator the filter core fetches through.

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::filter_query::{FilterDimension, FilterSet};
use crate::perimeter::Perimeter;

/// Non-success response or transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "request failed with status {}: {}", status, self.message),
            None => write!(f, "request failed: {}", self.message),
        }
    }
}

impl std::error::Error for RequestError {}

/// A request error raised while refetching a dependent option catalog. The
/// failed refresh leaves the previous catalog, selection and cache untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRefreshError {
    pub dimension: FilterDimension,
    pub source: RequestError,
}

impl std::fmt::Display for CatalogRefreshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "catalog refresh for {} failed: {}",
            self.dimension.param_name(),
            self.source
        )
    }
}

impl std::error::Error for CatalogRefreshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Performs the actual fetch for one endpoint under the given perimeter and
/// filters. Implementations must not retry; a failure is reported as-is.
pub trait DataGateway {
    fn fetch(
        &self,
        endpoint: Endpoint,
        perimeter: Perimeter,
        filters: &FilterSet,
    ) -> impl Future<Output = Result<Value, RequestError>>;
}
