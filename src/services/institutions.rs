//! Channel institution operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for institution operations.
pub struct InstitutionsService<'a> {
    client: &'a ItsClient,
}

impl<'a> InstitutionsService<'a> {
    /// Creates a new institution service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Finds institutions of the delivery channel.
    pub async fn find_by_channel(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_CHANNEL_INSTITUTIONS, params, None)
            .await
    }

    /// Imports institutions. Institution-level clients must pass `parent-program-institution-id`.
    pub async fn import(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::IMPORT_CHANNEL_INSTITUTIONS, params, Some(body.into()))
            .await
    }

    /// Updates imported institutions.
    pub async fn update(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_CHANNEL_INSTITUTIONS, params, Some(body.into()))
            .await
    }
}
