//! Conditional Rules
//!
//! Shared cross-parameter rules of the ITS API. Each is a plain
//! [`ParameterRule`] so descriptors can reference them from static tables.

use crate::types::RequestParameters;
use crate::validation::rules::ParameterRule;
use crate::validation::ValidationContext;

/// `event-id` XOR `event-description`.
pub const EVENT_IDENTIFIER: ParameterRule =
    ParameterRule::RequiredIfAbsent("event-id", "event-description");

/// `event-id` and `event-description` may not be combined, but both may be omitted.
pub const EVENT_FILTER: ParameterRule =
    ParameterRule::MutuallyExclusive("event-id", "event-description");

/// `longitudinal-group-id` XOR `longitudinal-group-name`.
pub const LONGITUDINAL_GROUP_IDENTIFIER: ParameterRule =
    ParameterRule::RequiredIfAbsent("longitudinal-group-id", "longitudinal-group-name");

/// `start-utc` and `end-utc` come together.
pub const UTC_WINDOW: ParameterRule = ParameterRule::RequiredTogether("start-utc", "end-utc");

/// `start-order-utc` and `end-order-utc` come together.
pub const ORDER_WINDOW: ParameterRule =
    ParameterRule::RequiredTogether("start-order-utc", "end-order-utc");

/// `ordered-after-utc` and `ordered-before-utc` come together.
pub const ORDERED_WINDOW: ParameterRule =
    ParameterRule::RequiredTogether("ordered-after-utc", "ordered-before-utc");

/// `session-code`, or a complete `start-utc`/`end-utc` window.
pub const SESSION_OR_WINDOW: ParameterRule = ParameterRule::EitherOrPair {
    single: "session-code",
    pair: ("start-utc", "end-utc"),
};

/// Institution-level clients must name their parent institution.
pub const PARENT_INSTITUTION_FOR_INSTITUTION_CLIENTS: ParameterRule =
    ParameterRule::ConditionalOnContext {
        name: "parent-program-institution-id",
        applies: is_institution_client,
        description: "parent-program-institution-id is required for institution-level clients",
    };

/// Admin URLs of type 1 are per session.
pub const SESSION_CODE_FOR_URL_TYPE_ONE: ParameterRule = ParameterRule::ConditionalOnContext {
    name: "session-code",
    applies: is_url_type_one,
    description: "session-code is required when url-type = 1 for Remote admin URLs",
};

fn is_institution_client(context: &ValidationContext, _params: &RequestParameters) -> bool {
    context.institution_client
}

fn is_url_type_one(_context: &ValidationContext, params: &RequestParameters) -> bool {
    params.get("url-type").and_then(|v| v.as_i64()) == Some(1)
}
