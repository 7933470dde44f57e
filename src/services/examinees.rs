//! Examinee, longitudinal and message operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for examinee operations.
pub struct ExamineesService<'a> {
    client: &'a ItsClient,
}

impl<'a> ExamineesService<'a> {
    /// Creates a new examinee service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries examinees.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EXAMINEES, params, None)
            .await
    }

    /// Queries examinee records.
    pub async fn query_records(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EXAMINEE_RECORDS, params, None)
            .await
    }

    /// Queries the examinee audit trail.
    pub async fn query_audit(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EXAMINEE_AUDIT, params, None)
            .await
    }

    /// Queries events of examinees.
    pub async fn query_events(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EXAMINEE_EVENTS, params, None)
            .await
    }
}

/// Service for longitudinal group operations.
pub struct LongitudinalGroupsService<'a> {
    client: &'a ItsClient,
}

impl<'a> LongitudinalGroupsService<'a> {
    /// Creates a new longitudinal group service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries group examinees by `longitudinal-group-id` or `longitudinal-group-name`.
    pub async fn query_examinees(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_LONGITUDINAL_GROUP_EXAMINEES, params, None)
            .await
    }

    /// Adds examinees to groups.
    pub async fn add_examinees(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_LONGITUDINAL_GROUP_EXAMINEES, params, Some(body.into()))
            .await
    }

    /// Updates group examinees.
    pub async fn update_examinees(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_LONGITUDINAL_GROUP_EXAMINEES, params, Some(body.into()))
            .await
    }

    /// Removes examinees from a group.
    pub async fn remove_examinees(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_LONGITUDINAL_GROUP_EXAMINEES, params, None)
            .await
    }

    /// Queries longitudinal segments.
    pub async fn query_segments(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_LONGITUDINAL_SEGMENTS, params, None)
            .await
    }

    /// Queries longitudinal segment details.
    pub async fn query_segment_details(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_LONGITUDINAL_SEGMENT_DETAILS, params, None)
            .await
    }
}

/// Service for message history operations.
pub struct MessagesService<'a> {
    client: &'a ItsClient,
}

impl<'a> MessagesService<'a> {
    /// Creates a new message history service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries message history.
    pub async fn query_history(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_MESSAGE_HISTORY, params, None)
            .await
    }
}
