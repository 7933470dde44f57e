//! Form and package operations.

use crate::client::ItsClient;
use crate::endpoints::catalog;
use crate::error::ItsResult;
use crate::types::{ApiResponse, RequestBody, RequestParameters};

/// Service for form operations.
pub struct FormsService<'a> {
    client: &'a ItsClient,
}

impl<'a> FormsService<'a> {
    /// Creates a new form service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries forms.
    pub async fn query(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_FORMS, params, None)
            .await
    }

    /// Creates a form.
    pub async fn create(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::CREATE_FORM, params, Some(body.into()))
            .await
    }

    /// Updates a form.
    pub async fn update(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::UPDATE_FORM, params, Some(body.into()))
            .await
    }

    /// Deletes a form.
    pub async fn delete(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::DELETE_FORM, params, None)
            .await
    }

    /// Queries form definitions.
    pub async fn query_definitions(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_FORM_DEFINITIONS, params, None)
            .await
    }

    /// Imports a form definition.
    pub async fn import_definition(
        &self,
        params: impl Into<RequestParameters>,
        body: impl Into<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::IMPORT_FORM_DEFINITION, params, Some(body.into()))
            .await
    }

    /// Queries form reports. Requires `test-id` and `form-id`.
    pub async fn query_reports(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_FORM_REPORTS, params, None)
            .await
    }

    /// Queries form resource files.
    pub async fn query_res_files(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_FORM_RES_FILES, params, None)
            .await
    }
}

/// Service for package operations.
pub struct PackagesService<'a> {
    client: &'a ItsClient,
}

impl<'a> PackagesService<'a> {
    /// Creates a new package service.
    pub fn new(client: &'a ItsClient) -> Self {
        Self { client }
    }

    /// Queries the forms of a package.
    pub async fn query_forms(&self, params: impl Into<RequestParameters>) -> ItsResult<ApiResponse> {
        self.client
            .execute(&catalog::QUERY_PACKAGE_FORMS, params, None)
            .await
    }
}
