//! Lookups that carry no program context.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestParameters};

/// Service for system operations.
pub struct SystemService<'a> {
    client: &'a ItsClient,
}

impl<'a> SystemService<'a> {
    /// Creates a new system service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Lists supported timezones.
    pub async fn query_timezones(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_TIMEZONES, params, None)
            .await
    }

    /// Lists SignalR domains.
    pub async fn query_signalr_domains(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_SIGNALR_DOMAINS, params, None)
            .await
    }
}
