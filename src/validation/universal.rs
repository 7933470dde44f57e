//! Universal Rules
//!
//! `program-id` applies to nearly every operation; `program-institution-id`
//! only where the descriptor flags it.

use crate::endpoints::{EndpointDescriptor, ParamRequirement};
use crate::error::ValidationError;
use crate::types::RequestParameters;

pub const PROGRAM_ID: &str = "program-id";
pub const PROGRAM_INSTITUTION_ID: &str = "program-institution-id";

pub fn check_program_id(
    descriptor: &EndpointDescriptor,
    params: &RequestParameters,
) -> Result<(), ValidationError> {
    check(descriptor.program_id, PROGRAM_ID, descriptor, params)
}

pub fn check_program_institution_id(
    descriptor: &EndpointDescriptor,
    params: &RequestParameters,
) -> Result<(), ValidationError> {
    check(
        descriptor.program_institution_id,
        PROGRAM_INSTITUTION_ID,
        descriptor,
        params,
    )
}

fn check(
    requirement: ParamRequirement,
    name: &str,
    descriptor: &EndpointDescriptor,
    params: &RequestParameters,
) -> Result<(), ValidationError> {
    if requirement == ParamRequirement::Required && !params.is_present(name) {
        return Err(ValidationError::new(
            name,
            crate::error::ViolationKind::Missing,
            format!("{} is required for {}", name, descriptor.path),
        ));
    }
    Ok(())
}
