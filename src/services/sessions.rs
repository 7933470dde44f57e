//! Testing session and secure browser operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for session operations.
pub struct SessionsService<'a> {
    client: &'a ItsClient,
}

impl<'a> SessionsService<'a> {
    /// Creates a new session service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries sessions.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_SESSIONS, params, None)
            .await
    }

    /// Creates a session.
    pub async fn create(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_SESSION, params, Some(body.into()))
            .await
    }

    /// Updates a session.
    pub async fn update(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_SESSION, params, Some(body.into()))
            .await
    }

    /// Deletes a session.
    pub async fn delete(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_SESSION, params, None)
            .await
    }
}

/// Service for secure browser operations.
pub struct SecurityService<'a> {
    client: &'a ItsClient,
}

impl<'a> SecurityService<'a> {
    /// Creates a new secure browser service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries secure browser errors. Requires `environment-id`.
    pub async fn query_browser_errors(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_SECURE_BROWSER_ERRORS, params, None)
            .await
    }

    /// Validates a secure browser token.
    pub async fn validate_browser_token(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::VALIDATE_SECURE_BROWSER_TOKEN, params, Some(body.into()))
            .await
    }
}
