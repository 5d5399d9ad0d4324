use async_trait::async_trait;

use super::types::{RecordId, Route, Stop};
use crate::utils::DirectoryError;

/// Read-only access to the route/stop directory.
///
/// Implementations must bound every call with a finite timeout; a timeout is
/// reported like any other failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Directory: Send + Sync {
    /// List routes serving `region`. `None` is passed through unchanged and
    /// the directory decides what it means.
    async fn list_routes_by_region(
        &self,
        region: Option<String>,
    ) -> Result<Vec<Route>, DirectoryError>;

    /// List the stops of one route
    async fn list_stops_by_route(&self, route_id: RecordId) -> Result<Vec<Stop>, DirectoryError>;
}
