//! Order and inventory operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for order operations.
pub struct OrdersService<'a> {
    client: &'a ItsClient,
}

impl<'a> OrdersService<'a> {
    /// Creates a new order service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries orders.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_ORDERS, params, None)
            .await
    }

    /// Creates an order.
    pub async fn create(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_ORDER, params, Some(body.into()))
            .await
    }

    /// Deletes an order.
    pub async fn delete(
        &self,
        params: impl Into<RequestParameters>,
        body: Option<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_ORDER, params, body)
            .await
    }
}

/// Service for inventory operations.
pub struct InventoryService<'a> {
    client: &'a ItsClient,
}

impl<'a> InventoryService<'a> {
    /// Creates a new inventory service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries inventory. Requires `program-institution-id`.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_INVENTORY, params, None)
            .await
    }
}
