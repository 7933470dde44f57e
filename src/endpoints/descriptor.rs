//! Endpoint Descriptor
//!
//! Static metadata for one REST operation: method, exact path, parameter
//! contract and body expectations.

use crate::core::HttpMethod;
use crate::validation::universal::{PROGRAM_ID, PROGRAM_INSTITUTION_ID};
use crate::validation::{BodyRule, BodySpec, ParameterRule};

/// How an operation treats one of the universal parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamRequirement {
    Required,
    Optional,
    /// The operation carries no such context.
    NotAccepted,
}

impl ParamRequirement {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::NotAccepted)
    }
}

/// Resource family an operation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    EventClasses,
    Events,
    Examinees,
    Forms,
    Institutions,
    Inventory,
    ItemWorkshop,
    LongitudinalGroups,
    Messages,
    Orders,
    Packages,
    Registrations,
    Remote,
    Results,
    Scheduling,
    Security,
    Sessions,
    System,
    Testing,
    Users,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EventClasses => "event-classes",
            Self::Events => "events",
            Self::Examinees => "examinees",
            Self::Forms => "forms",
            Self::Institutions => "institutions",
            Self::Inventory => "inventory",
            Self::ItemWorkshop => "item-workshop",
            Self::LongitudinalGroups => "longitudinal-groups",
            Self::Messages => "messages",
            Self::Orders => "orders",
            Self::Packages => "packages",
            Self::Registrations => "registrations",
            Self::Remote => "remote",
            Self::Results => "results",
            Self::Scheduling => "scheduling",
            Self::Security => "security",
            Self::Sessions => "sessions",
            Self::System => "system",
            Self::Testing => "testing",
            Self::Users => "users",
        }
    }
}

/// One documented REST operation. Read-only at runtime.
///
/// `path` is the upstream template verbatim; casing is significant.
#[derive(Clone, Copy, Debug)]
pub struct EndpointDescriptor {
    pub operation_id: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub program_id: ParamRequirement,
    pub program_institution_id: ParamRequirement,
    /// Required beyond the universal parameters, checked in order.
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    /// Cross-parameter rules, checked in order.
    pub rules: &'static [ParameterRule],
    pub body: BodySpec,
}

impl EndpointDescriptor {
    /// Descriptor with `program-id` required, `program-institution-id`
    /// optional and no body.
    pub const fn new(
        operation_id: &'static str,
        method: HttpMethod,
        path: &'static str,
        category: Category,
    ) -> Self {
        Self {
            operation_id,
            method,
            path,
            category,
            summary: "",
            program_id: ParamRequirement::Required,
            program_institution_id: ParamRequirement::Optional,
            required: &[],
            optional: &[],
            rules: &[],
            body: BodySpec::None,
        }
    }

    pub const fn get(operation_id: &'static str, path: &'static str, category: Category) -> Self {
        Self::new(operation_id, HttpMethod::Get, path, category)
    }

    pub const fn post(operation_id: &'static str, path: &'static str, category: Category) -> Self {
        Self::new(operation_id, HttpMethod::Post, path, category)
    }

    pub const fn put(operation_id: &'static str, path: &'static str, category: Category) -> Self {
        Self::new(operation_id, HttpMethod::Put, path, category)
    }

    pub const fn patch(operation_id: &'static str, path: &'static str, category: Category) -> Self {
        Self::new(operation_id, HttpMethod::Patch, path, category)
    }

    pub const fn delete(operation_id: &'static str, path: &'static str, category: Category) -> Self {
        Self::new(operation_id, HttpMethod::Delete, path, category)
    }

    pub const fn summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    pub const fn requires(mut self, names: &'static [&'static str]) -> Self {
        self.required = names;
        self
    }

    pub const fn accepts(mut self, names: &'static [&'static str]) -> Self {
        self.optional = names;
        self
    }

    pub const fn rules(mut self, rules: &'static [ParameterRule]) -> Self {
        self.rules = rules;
        self
    }

    pub const fn institution_required(mut self) -> Self {
        self.program_institution_id = ParamRequirement::Required;
        self
    }

    pub const fn without_institution(mut self) -> Self {
        self.program_institution_id = ParamRequirement::NotAccepted;
        self
    }

    /// `program-id` accepted but not required.
    pub const fn program_optional(mut self) -> Self {
        self.program_id = ParamRequirement::Optional;
        self
    }

    /// No program context at all.
    pub const fn program_exempt(mut self) -> Self {
        self.program_id = ParamRequirement::NotAccepted;
        self
    }

    pub const fn json_body(mut self) -> Self {
        self.body = BodySpec::Json {
            required: true,
            rule: None,
        };
        self
    }

    pub const fn optional_json_body(mut self) -> Self {
        self.body = BodySpec::Json {
            required: false,
            rule: None,
        };
        self
    }

    pub const fn json_body_with(mut self, rule: BodyRule) -> Self {
        self.body = BodySpec::Json {
            required: true,
            rule: Some(rule),
        };
        self
    }

    pub const fn multipart_body(mut self) -> Self {
        self.body = BodySpec::Multipart;
        self
    }

    /// Whether `name` is part of the documented contract.
    pub fn accepts_param(&self, name: &str) -> bool {
        (name == PROGRAM_ID && self.program_id.is_accepted())
            || (name == PROGRAM_INSTITUTION_ID && self.program_institution_id.is_accepted())
            || self.required.iter().any(|n| *n == name)
            || self.optional.iter().any(|n| *n == name)
            || self
                .rules
                .iter()
                .any(|rule| rule.parameters().iter().any(|n| *n == name))
    }

    /// Every parameter that must be present regardless of other values.
    pub fn required_params(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.program_id == ParamRequirement::Required {
            names.push(PROGRAM_ID);
        }
        if self.program_institution_id == ParamRequirement::Required {
            names.push(PROGRAM_INSTITUTION_ID);
        }
        names.extend_from_slice(self.required);
        names.extend(self.rules.iter().filter_map(|rule| match rule {
            ParameterRule::RequiredAlways(name) => Some(*name),
            _ => None,
        }));
        names
    }

    /// Whether responses of this operation are safe to retry.
    pub fn is_idempotent(&self) -> bool {
        matches!(self.method, HttpMethod::Get | HttpMethod::Put | HttpMethod::Delete)
    }
}
