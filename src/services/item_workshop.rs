//! Item workshop operations. None of them take program context.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for item workshop operations.
pub struct ItemWorkshopService<'a> {
    client: &'a ItsClient,
}

impl<'a> ItemWorkshopService<'a> {
    /// Creates a new item workshop service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries test exports.
    pub async fn query_test_exports(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_TEST_EXPORTS, params, None)
            .await
    }

    /// Imports a package. The body is multipart with an `import-data` part.
    pub async fn import(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::IMPORT_ITEM_WORKSHOP, params, Some(body.into()))
            .await
    }

    /// Starts an asynchronous import.
    pub async fn import_async(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::IMPORT_ITEM_WORKSHOP_ASYNC, params, Some(body.into()))
            .await
    }

    /// Queries an import.
    pub async fn query_import(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_ITEM_WORKSHOP_IMPORT, params, None)
            .await
    }
}
