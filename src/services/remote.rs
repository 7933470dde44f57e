//! Remote proctoring operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for remote operations.
pub struct RemoteService<'a> {
    client: &'a ItsClient,
}

impl<'a> RemoteService<'a> {
    /// Creates a new remote service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries sessions by `session-code` or a `start-utc`/`end-utc` window.
    pub async fn query_sessions(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_REMOTE_SESSIONS, params, None)
            .await
    }

    /// Creates a remote session.
    pub async fn create_session(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_REMOTE_SESSION, params, Some(body.into()))
            .await
    }

    /// Updates a remote session.
    pub async fn update_session(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_REMOTE_SESSION, params, Some(body.into()))
            .await
    }

    /// Deletes a remote session.
    pub async fn delete_session(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_REMOTE_SESSION, params, None)
            .await
    }

    /// Queries admin URLs. `url-type = 1` requires `session-code`.
    pub async fn query_admin_urls(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_REMOTE_ADMIN_URLS, params, None)
            .await
    }

    /// Queries remote examinee data.
    pub async fn query_examinee_data(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_REMOTE_EXAMINEE_DATA, params, None)
            .await
    }

    /// Queries remote session data.
    pub async fn query_session_data(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_REMOTE_SESSION_DATA, params, None)
            .await
    }

    /// Queries practice checks.
    pub async fn query_practice_checks(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_REMOTE_PRACTICE_CHECKS, params, None)
            .await
    }

    /// Queries system checks.
    pub async fn query_system_checks(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_REMOTE_SYSTEM_CHECKS, params, None)
            .await
    }
}
