//! Result operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestParameters};

/// Service for result operations.
pub struct ResultsService<'a> {
    client: &'a ItsClient,
}

impl<'a> ResultsService<'a> {
    /// Creates a new result service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries results.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_RESULTS, params, None)
            .await
    }

    /// Queries result identifiers.
    pub async fn query_identifiers(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_RESULT_IDENTIFIERS, params, None)
            .await
    }
}
