//! Registration and sabbatical operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for registration operations.
pub struct RegistrationsService<'a> {
    client: &'a ItsClient,
}

impl<'a> RegistrationsService<'a> {
    /// Creates a new registration service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries registrations.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_REGISTRATIONS, params, None)
            .await
    }

    /// Imports registrations.
    pub async fn import(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::IMPORT_REGISTRATIONS, params, Some(body.into()))
            .await
    }

    /// Re-imports registrations.
    pub async fn replace(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::REPLACE_REGISTRATIONS, params, Some(body.into()))
            .await
    }

    /// Updates a registration.
    pub async fn update(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_REGISTRATION, params, Some(body.into()))
            .await
    }

    /// Deletes a registration. Requires `Reason`.
    pub async fn delete(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_REGISTRATION, params, None)
            .await
    }
}

/// Service for scheduling operations.
pub struct SchedulingService<'a> {
    client: &'a ItsClient,
}

impl<'a> SchedulingService<'a> {
    /// Creates a new scheduling service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries sabbaticals.
    pub async fn query_sabbaticals(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_SABBATICALS, params, None)
            .await
    }
}
