// Sender seam
//
// Business objects never talk HTTP directly. They hand a `RestRequest` to a
// `Sender` and get back a `ControllerResponse` shaped like the controller's
// reply dictionary. `HttpSender` does real I/O; `ScriptedSender` replays
// recorded responses for tests and offline runs.

mod http;
mod scripted;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

pub use http::HttpSender;
pub use scripted::ScriptedSender;

/// HTTP verb for a controller request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Verbs that modify controller state.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Get)
    }
}

/// A single request ready to be sent. `path` includes any query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestRequest {
    pub verb: Verb,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl RestRequest {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// The controller's reply, normalised by the sender.
///
/// Serialises with the upper-case keys used in recorded response files:
/// ```json
/// { "RETURN_CODE": 200, "METHOD": "GET", "REQUEST_PATH": "/api/...",
///   "MESSAGE": "OK", "DATA": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerResponse {
    #[serde(rename = "RETURN_CODE")]
    pub return_code: u16,
    #[serde(rename = "METHOD", default)]
    pub method: String,
    #[serde(rename = "REQUEST_PATH", default)]
    pub request_path: String,
    #[serde(rename = "MESSAGE", default)]
    pub message: String,
    #[serde(rename = "DATA", default)]
    pub data: Value,
}

impl ControllerResponse {
    /// A reply with the given code and body; `MESSAGE` defaults to `"OK"`.
    pub fn new(return_code: u16, data: Value) -> Self {
        Self {
            return_code,
            method: String::new(),
            request_path: String::new(),
            message: "OK".into(),
            data,
        }
    }

    /// Stamp the request this reply answers.
    pub fn for_request(mut self, request: &RestRequest) -> Self {
        self.method = request.verb.to_string();
        self.request_path.clone_from(&request.path);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Look up `DATA.<key>`, returning `Value::Null` when absent.
    pub fn data_field(&self, key: &str) -> &Value {
        self.data.get(key).unwrap_or(&Value::Null)
    }
}

/// Anything able to deliver a `RestRequest` to the controller.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send(&self, request: &RestRequest) -> Result<ControllerResponse, Error>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn verb_display_and_parse() {
        assert_eq!(Verb::Delete.to_string(), "DELETE");
        assert_eq!(Verb::from_str("post").ok(), Some(Verb::Post));
        assert!(Verb::Put.is_mutating());
        assert!(!Verb::Get.is_mutating());
    }

    #[test]
    fn response_uses_upper_case_keys() {
        let raw = json!({
            "RETURN_CODE": 200,
            "METHOD": "GET",
            "REQUEST_PATH": "/api/v1/manage/credentials/details",
            "MESSAGE": "OK",
            "DATA": { "items": [] }
        });
        let response: ControllerResponse = serde_json::from_value(raw).expect("parse");

        assert_eq!(response.return_code, 200);
        assert_eq!(response.data_field("items"), &json!([]));
        assert_eq!(response.data_field("missing"), &Value::Null);
    }

    #[test]
    fn for_request_stamps_method_and_path() {
        let request = RestRequest::new(Verb::Post, "/api/v1/manage/credentials/switches");
        let response = ControllerResponse::new(200, json!({})).for_request(&request);

        assert_eq!(response.method, "POST");
        assert_eq!(response.request_path, "/api/v1/manage/credentials/switches");
    }
}
