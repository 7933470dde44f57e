//! Request Body Types

use crate::core::MultipartPart;

/// Body handed to an operation.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Serialized as `application/json`.
    Json(serde_json::Value),
    /// Sent as `multipart/form-data` (file imports).
    Multipart(Vec<MultipartPart>),
}

impl RequestBody {
    /// Serialize any model into a JSON body.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Json)
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Multipart(_) => None,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<Vec<MultipartPart>> for RequestBody {
    fn from(parts: Vec<MultipartPart>) -> Self {
        Self::Multipart(parts)
    }
}
