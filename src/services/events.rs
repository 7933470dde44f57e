//! Event and event-class operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for event-class operations.
pub struct EventClassesService<'a> {
    client: &'a ItsClient,
}

impl<'a> EventClassesService<'a> {
    /// Creates a new event-class service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries event classes. Requires `program-institution-id` and `event-id`.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EVENT_CLASSES, params, None)
            .await
    }

    /// Creates an event class.
    pub async fn create(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_EVENT_CLASS, params, Some(body.into()))
            .await
    }

    /// Updates an event class.
    pub async fn update(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_EVENT_CLASS, params, Some(body.into()))
            .await
    }

    /// Deletes an event class.
    pub async fn delete(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_EVENT_CLASS, params, None)
            .await
    }

    /// Adds examinees to an event class.
    pub async fn add_examinees(
        &self,
        params: impl Into<RequestParameters>,
        body: Option<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_EVENT_CLASS_EXAMINEES, params, body)
            .await
    }

    /// Queries examinees of event classes.
    pub async fn query_examinees(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EVENT_CLASS_EXAMINEES, params, None)
            .await
    }

    /// Removes examinees from an event class.
    pub async fn remove_examinees(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_EVENT_CLASS_EXAMINEES, params, None)
            .await
    }
}

/// Service for event operations.
pub struct EventsService<'a> {
    client: &'a ItsClient,
}

impl<'a> EventsService<'a> {
    /// Creates a new event service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries events. `event-id` and `event-description` cannot be combined.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EVENTS, params, None)
            .await
    }

    /// Queries event authorizations by `event-id` or `event-description`.
    pub async fn query_authorizations(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_EVENT_AUTHORIZATIONS, params, None)
            .await
    }

    /// Creates an event. The body needs `eventName` and `eventDescription`.
    pub async fn create(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_EVENT, params, Some(body.into()))
            .await
    }

    /// Updates an event.
    pub async fn update(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_EVENT, params, Some(body.into()))
            .await
    }

    /// Closes an event.
    pub async fn close(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CLOSE_EVENT, params, None)
            .await
    }

    /// Imports examinees. The body is a non-empty array of objects with `examineeId`.
    pub async fn import_examinees(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::IMPORT_EVENT_EXAMINEES, params, Some(body.into()))
            .await
    }

    /// Updates imported examinees.
    pub async fn update_examinees(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_EVENT_EXAMINEES, params, Some(body.into()))
            .await
    }
}
