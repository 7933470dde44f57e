//! Request Body Rules

use serde_json::Value;

use crate::error::{ValidationError, ViolationKind};
use crate::types::RequestBody;

/// Shape constraint on a JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyRule {
    /// A JSON object carrying these non-empty top-level fields.
    RequiredFields {
        fields: &'static [&'static str],
        context: &'static str,
    },
    /// A non-empty JSON array whose elements each carry `fields`.
    NonEmptyArray {
        element: &'static str,
        fields: &'static [&'static str],
    },
}

/// What body, if any, an operation takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodySpec {
    None,
    Json {
        required: bool,
        rule: Option<BodyRule>,
    },
    /// multipart/form-data file import; the file part itself is optional.
    Multipart,
}

impl BodySpec {
    pub fn accepts_body(&self) -> bool {
        !matches!(self, Self::None)
    }
}

fn invalid(parameter: impl Into<String>, message: impl Into<String>) -> ValidationError {
    ValidationError::new(parameter, ViolationKind::InvalidBody, message)
}

/// Missing, null, empty string and `false`/`0` all fail a required field.
fn field_present(object: &Value, field: &str) -> bool {
    match object.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |x| x != 0.0),
        Some(_) => true,
    }
}

/// Validate `body` against the operation's body spec.
pub fn check_body(spec: &BodySpec, body: Option<&RequestBody>) -> Result<(), ValidationError> {
    match (spec, body) {
        (BodySpec::None, _) => Ok(()),
        (BodySpec::Multipart, Some(RequestBody::Json(_))) => Err(invalid(
            "body",
            "This operation expects a multipart/form-data body",
        )),
        (BodySpec::Multipart, _) => Ok(()),
        (BodySpec::Json { required, .. }, None) => {
            if *required {
                Err(invalid("body", "Request body is required for this operation"))
            } else {
                Ok(())
            }
        }
        (BodySpec::Json { .. }, Some(RequestBody::Multipart(_))) => {
            Err(invalid("body", "This operation expects a JSON body"))
        }
        (BodySpec::Json { required, rule }, Some(RequestBody::Json(value))) => {
            if value.is_null() {
                return if *required {
                    Err(invalid("body", "Request body is required for this operation"))
                } else {
                    Ok(())
                };
            }
            match rule {
                Some(rule) => check_rule(rule, value),
                None => Ok(()),
            }
        }
    }
}

fn check_rule(rule: &BodyRule, value: &Value) -> Result<(), ValidationError> {
    match *rule {
        BodyRule::RequiredFields { fields, context } => {
            if !value.is_object() {
                return Err(invalid("body", format!("{} body must be a JSON object", context)));
            }
            match fields.iter().find(|field| !field_present(value, field)) {
                Some(field) => Err(invalid(*field, format!("{} is required for {}", field, context))),
                None => Ok(()),
            }
        }
        BodyRule::NonEmptyArray { element, fields } => {
            let items = value.as_array().ok_or_else(|| {
                invalid("body", format!("Request body must be an array of {} objects", element))
            })?;
            if items.is_empty() {
                return Err(invalid(
                    "body",
                    format!("At least one {} must be provided", element),
                ));
            }
            for (index, item) in items.iter().enumerate() {
                if let Some(field) = fields.iter().find(|field| !field_present(item, field)) {
                    let path = format!("{}[{}].{}", element, index, field);
                    return Err(invalid(path.clone(), format!("{} is required", path)));
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MultipartPart;
    use serde_json::json;

    const EXAMINEE_IMPORT: BodySpec = BodySpec::Json {
        required: true,
        rule: Some(BodyRule::NonEmptyArray {
            element: "examinee",
            fields: &["examineeId"],
        }),
    };

    const EVENT_CREATE: BodySpec = BodySpec::Json {
        required: true,
        rule: Some(BodyRule::RequiredFields {
            fields: &["eventName", "eventDescription"],
            context: "event creation",
        }),
    };

    fn json_body(value: Value) -> RequestBody {
        RequestBody::Json(value)
    }

    #[test]
    fn test_examinee_import_requires_elements_with_ids() {
        let missing = check_body(&EXAMINEE_IMPORT, None).unwrap_err();
        assert_eq!(missing.parameter, "body");

        let not_array = check_body(&EXAMINEE_IMPORT, Some(&json_body(json!({"examineeId": 1})))).unwrap_err();
        assert!(not_array.message.contains("array"));

        let empty = check_body(&EXAMINEE_IMPORT, Some(&json_body(json!([])))).unwrap_err();
        assert_eq!(empty.message, "At least one examinee must be provided");

        let second_bad = check_body(
            &EXAMINEE_IMPORT,
            Some(&json_body(json!([{"examineeId": 10}, {"firstName": "Ada"}]))),
        )
        .unwrap_err();
        assert_eq!(second_bad.parameter, "examinee[1].examineeId");
        assert_eq!(second_bad.message, "examinee[1].examineeId is required");

        assert!(check_body(&EXAMINEE_IMPORT, Some(&json_body(json!([{"examineeId": "E-1"}])))).is_ok());
    }

    #[test]
    fn test_event_creation_fields_checked_in_order() {
        let err = check_body(&EVENT_CREATE, Some(&json_body(json!({"eventDescription": "x"})))).unwrap_err();
        assert_eq!(err.parameter, "eventName");
        assert_eq!(err.message, "eventName is required for event creation");

        let err = check_body(&EVENT_CREATE, Some(&json_body(json!({"eventName": "Fall", "eventDescription": ""})))).unwrap_err();
        assert_eq!(err.parameter, "eventDescription");

        assert!(check_body(
            &EVENT_CREATE,
            Some(&json_body(json!({"eventName": "Fall", "eventDescription": "Fall window"})))
        )
        .is_ok());
    }

    #[test]
    fn test_body_kind_must_match() {
        let multipart = RequestBody::Multipart(vec![MultipartPart::text("note", "x")]);
        let optional_json = BodySpec::Json {
            required: false,
            rule: None,
        };
        assert!(check_body(&optional_json, None).is_ok());
        assert!(check_body(&optional_json, Some(&multipart)).is_err());
        assert!(check_body(&BodySpec::Multipart, Some(&multipart)).is_ok());
        assert!(check_body(&BodySpec::Multipart, Some(&json_body(json!({})))).is_err());
    }
}
