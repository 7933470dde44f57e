//! Test, test form and test start operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for testing operations.
pub struct TestingService<'a> {
    client: &'a ItsClient,
}

impl<'a> TestingService<'a> {
    /// Creates a new testing service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries tests.
    pub async fn query_tests(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_TESTS, params, None)
            .await
    }

    /// Queries test forms.
    pub async fn query_forms(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_TEST_FORMS, params, None)
            .await
    }

    /// Queries pretest references.
    pub async fn query_pretest_references(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_TEST_PRETEST_REFERENCES, params, None)
            .await
    }

    /// Imports pretest references.
    pub async fn import_pretest_references(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::IMPORT_TEST_PRETEST_REFERENCES, params, Some(body.into()))
            .await
    }

    /// Logs an examinee into a test.
    pub async fn login(
        &self,
        params: impl Into<RequestParameters>,
        body: Option<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::START_TEST_LOGIN, params, body)
            .await
    }

    /// Starts a test.
    pub async fn start(
        &self,
        params: impl Into<RequestParameters>,
        body: Option<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::START_TEST, params, body)
            .await
    }
}
