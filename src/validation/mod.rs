//! Parameter Validation
//!
//! Pure, synchronous checks run before any request is built. The first
//! violation wins, in this order:
//!
//! 1. `program-id`, unless the operation is exempt
//! 2. `program-institution-id`, where flagged
//! 3. the descriptor's required parameters, in declared order
//! 4. the descriptor's conditional rules, in declared order
//! 5. the request body

pub mod body;
pub mod conditional;
pub mod rules;
pub mod universal;

pub use body::{check_body, BodyRule, BodySpec};
pub use rules::{ContextPredicate, ParameterRule};

use tracing::debug;

use crate::endpoints::EndpointDescriptor;
use crate::error::ValidationError;
use crate::types::{RequestBody, RequestParameters};

/// Facts about the calling client that some rules depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// Credentials belong to an institution-level client.
    pub institution_client: bool,
}

/// Validate one call against its descriptor.
pub fn validate_request(
    descriptor: &EndpointDescriptor,
    params: &RequestParameters,
    body: Option<&RequestBody>,
    context: &ValidationContext,
) -> Result<(), ValidationError> {
    run_checks(descriptor, params, body, context)
        .map_err(|e| e.for_operation(descriptor.operation_id))?;

    for unknown in params.keys().filter(|name| !descriptor.accepts_param(name)) {
        debug!(
            operation = descriptor.operation_id,
            parameter = unknown,
            "passing through undocumented parameter"
        );
    }

    Ok(())
}

fn run_checks(
    descriptor: &EndpointDescriptor,
    params: &RequestParameters,
    body: Option<&RequestBody>,
    context: &ValidationContext,
) -> Result<(), ValidationError> {
    universal::check_program_id(descriptor, params)?;
    universal::check_program_institution_id(descriptor, params)?;

    if let Some(missing) = descriptor.required.iter().find(|name| !params.is_present(name)) {
        return Err(ValidationError::missing(missing));
    }

    for rule in descriptor.rules {
        rule.evaluate(params, context)?;
    }

    check_body(&descriptor.body, body)
}
