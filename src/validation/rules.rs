//! Parameter Rules
//!
//! Cross-parameter constraints evaluated before a request is built.

use crate::error::{ValidationError, ViolationKind};
use crate::types::RequestParameters;
use crate::validation::ValidationContext;

/// Predicate deciding whether a context-dependent rule applies.
pub type ContextPredicate = fn(&ValidationContext, &RequestParameters) -> bool;

/// One parameter constraint.
#[derive(Clone, Copy)]
pub enum ParameterRule {
    /// The parameter must be present.
    RequiredAlways(&'static str),
    /// Exactly one of the two must be present.
    RequiredIfAbsent(&'static str, &'static str),
    /// At most one of the two may be present.
    MutuallyExclusive(&'static str, &'static str),
    /// Both or neither.
    RequiredTogether(&'static str, &'static str),
    /// `single`, or both halves of `pair`.
    EitherOrPair {
        single: &'static str,
        pair: (&'static str, &'static str),
    },
    /// `name` is required whenever `applies` holds.
    ConditionalOnContext {
        name: &'static str,
        applies: ContextPredicate,
        description: &'static str,
    },
}

impl ParameterRule {
    /// Check the rule, reporting the first violation.
    pub fn evaluate(
        &self,
        params: &RequestParameters,
        context: &ValidationContext,
    ) -> Result<(), ValidationError> {
        match *self {
            Self::RequiredAlways(name) => {
                if params.is_present(name) {
                    Ok(())
                } else {
                    Err(ValidationError::missing(name))
                }
            }
            Self::RequiredIfAbsent(a, b) => match (params.is_present(a), params.is_present(b)) {
                (false, false) => Err(ValidationError::new(
                    a,
                    ViolationKind::NeitherSupplied,
                    format!("Either {} or {} is required", a, b),
                )
                .with_alternatives([b])),
                (true, true) => Err(ValidationError::new(
                    b,
                    ViolationKind::Conflicting,
                    format!("Only one of {} or {} should be provided", a, b),
                )
                .with_alternatives([a])),
                _ => Ok(()),
            },
            Self::MutuallyExclusive(a, b) => {
                if params.is_present(a) && params.is_present(b) {
                    Err(ValidationError::new(
                        b,
                        ViolationKind::Conflicting,
                        format!("{} and {} cannot be combined", a, b),
                    )
                    .with_alternatives([a]))
                } else {
                    Ok(())
                }
            }
            Self::RequiredTogether(a, b) => match (params.is_present(a), params.is_present(b)) {
                (true, false) => Err(ValidationError::new(
                    b,
                    ViolationKind::IncompletePair,
                    format!("{} is required when {} is provided", b, a),
                )),
                (false, true) => Err(ValidationError::new(
                    a,
                    ViolationKind::IncompletePair,
                    format!("{} is required when {} is provided", a, b),
                )),
                _ => Ok(()),
            },
            Self::EitherOrPair { single, pair } => {
                let pair_complete = params.is_present(pair.0) && params.is_present(pair.1);
                if params.is_present(single) || pair_complete {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        single,
                        ViolationKind::NeitherSupplied,
                        format!(
                            "Either {} or both {} and {} are required",
                            single, pair.0, pair.1
                        ),
                    )
                    .with_alternatives([pair.0, pair.1]))
                }
            }
            Self::ConditionalOnContext {
                name,
                applies,
                description,
            } => {
                if applies(context, params) && !params.is_present(name) {
                    Err(ValidationError::new(
                        name,
                        ViolationKind::ConditionallyRequired,
                        description,
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Every parameter name the rule mentions.
    pub fn parameters(&self) -> Vec<&'static str> {
        match *self {
            Self::RequiredAlways(name) | Self::ConditionalOnContext { name, .. } => vec![name],
            Self::RequiredIfAbsent(a, b)
            | Self::MutuallyExclusive(a, b)
            | Self::RequiredTogether(a, b) => vec![a, b],
            Self::EitherOrPair { single, pair } => vec![single, pair.0, pair.1],
        }
    }
}

impl std::fmt::Debug for ParameterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredAlways(name) => f.debug_tuple("RequiredAlways").field(name).finish(),
            Self::RequiredIfAbsent(a, b) => {
                f.debug_tuple("RequiredIfAbsent").field(a).field(b).finish()
            }
            Self::MutuallyExclusive(a, b) => {
                f.debug_tuple("MutuallyExclusive").field(a).field(b).finish()
            }
            Self::RequiredTogether(a, b) => {
                f.debug_tuple("RequiredTogether").field(a).field(b).finish()
            }
            Self::EitherOrPair { single, pair } => f
                .debug_struct("EitherOrPair")
                .field("single", single)
                .field("pair", pair)
                .finish(),
            Self::ConditionalOnContext {
                name, description, ..
            } => f
                .debug_struct("ConditionalOnContext")
                .field("name", name)
                .field("description", description)
                .finish(),
        }
    }
}
