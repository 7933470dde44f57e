//! API Response Types

use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Decoded response body: JSON when it parses, raw text otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// Decode `raw` as JSON, falling back to text.
    pub fn decode(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw),
        }
    }
}

/// One HTTP outcome. Created per call, never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Lower-cased header names.
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
    raw: String,
}

impl ApiResponse {
    /// Decode `raw` and keep it alongside the decoded body.
    pub fn new(status: u16, headers: HashMap<String, String>, raw: String) -> Self {
        let body = ResponseBody::decode(raw.clone());
        Self {
            status,
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value))
                .collect(),
            body,
            raw,
        }
    }

    /// Body exactly as the server sent it.
    pub fn raw_body(&self) -> &str {
        &self.raw
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Text(text) => Some(text),
            ResponseBody::Json(_) => None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Deserialize a JSON body into a model type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match &self.body {
            ResponseBody::Json(value) => T::deserialize(value),
            ResponseBody::Text(text) => serde_json::from_str(text),
        }
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}
