//! User and user access operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestParameters};

/// Service for user operations.
pub struct UsersService<'a> {
    client: &'a ItsClient,
}

impl<'a> UsersService<'a> {
    /// Creates a new user service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries users.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_USERS, params, None)
            .await
    }

    /// Deletes a user. Requires `vendor-id`.
    pub async fn delete(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_USER, params, None)
            .await
    }

    /// Queries user access.
    pub async fn query_access(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_USER_ACCESS, params, None)
            .await
    }

    /// Revokes user access.
    pub async fn revoke_access(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_USER_ACCESS, params, None)
            .await
    }
}
