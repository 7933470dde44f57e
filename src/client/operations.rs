//! Operation Executor
//!
//! Binds an [`EndpointDescriptor`] to the request pipeline: default
//! injection, local validation, dispatch, and escalation of non-2xx
//! statuses to [`ApiError`].

use tracing::{debug, instrument, warn};

use crate::client::executor::{AuthenticatedRequestClient, RequestOptions};
use crate::endpoints::EndpointDescriptor;
use crate::error::{ApiError, ItsResult};
use crate::types::{ApiResponse, ItsConfig, RequestBody, RequestParameters};
use crate::validation::universal::{PROGRAM_ID, PROGRAM_INSTITUTION_ID};
use crate::validation::{validate_request, ValidationContext};

/// Identifiers added to calls that omit them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterDefaults {
    pub program_id: Option<String>,
    pub program_institution_id: Option<String>,
}

impl ParameterDefaults {
    pub fn from_config(config: &ItsConfig) -> Self {
        if !config.inject_defaults {
            return Self::default();
        }
        Self {
            program_id: config.default_program_id.clone(),
            program_institution_id: config.default_program_institution_id.clone(),
        }
    }

    /// Fill absent identifiers the operation accepts.
    pub fn apply(
        &self,
        descriptor: &EndpointDescriptor,
        mut params: RequestParameters,
    ) -> RequestParameters {
        let candidates = [
            (
                PROGRAM_ID,
                descriptor.program_id.is_accepted(),
                &self.program_id,
            ),
            (
                PROGRAM_INSTITUTION_ID,
                descriptor.program_institution_id.is_accepted(),
                &self.program_institution_id,
            ),
        ];

        for (name, accepted, value) in candidates {
            if let Some(value) = value.as_ref().filter(|_| accepted) {
                if !params.is_present(name) {
                    debug!(
                        operation = descriptor.operation_id,
                        parameter = name,
                        "injecting configured default"
                    );
                    params.insert(name, value.as_str());
                }
            }
        }
        params
    }
}

/// Runs catalog operations.
#[derive(Debug)]
pub struct OperationExecutor {
    requests: AuthenticatedRequestClient,
    defaults: ParameterDefaults,
    context: ValidationContext,
}

impl OperationExecutor {
    pub fn new(
        requests: AuthenticatedRequestClient,
        defaults: ParameterDefaults,
        context: ValidationContext,
    ) -> Self {
        Self {
            requests,
            defaults,
            context,
        }
    }

    pub fn requests(&self) -> &AuthenticatedRequestClient {
        &self.requests
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Validate and send one operation. Fails before any I/O when
    /// validation fails.
    #[instrument(
        skip_all,
        fields(
            operation = descriptor.operation_id,
            method = %descriptor.method,
            path = descriptor.path,
        )
    )]
    pub async fn execute(
        &self,
        descriptor: &EndpointDescriptor,
        params: RequestParameters,
        body: Option<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        let params = self.defaults.apply(descriptor, params);
        validate_request(descriptor, &params, body.as_ref(), &self.context)?;

        let options = RequestOptions {
            query: params.clone(),
            body,
            ..RequestOptions::default()
        };
        let response = self
            .requests
            .request(descriptor.method, descriptor.path, options)
            .await?;

        if response.is_success() {
            return Ok(response);
        }

        warn!(status = response.status, "ITS operation rejected");
        Err(ApiError {
            status: response.status,
            method: descriptor.method.to_string(),
            endpoint: descriptor.path.to_string(),
            operation_id: Some(descriptor.operation_id.to_string()),
            params,
            body: response.raw_body().to_string(),
        }
        .into())
    }
}
