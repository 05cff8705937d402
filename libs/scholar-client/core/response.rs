use crate::traits::error::{ClientError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Fully-read HTTP response
///
/// Header names are stored lowercase.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    /// Response with no headers and no body
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, HashMap::new(), Vec::new())
    }

    /// Response carrying `value` as an `application/json` body
    pub fn json_body(status: StatusCode, value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes())
    }

    /// Response carrying `text` as a `text/plain` body
    pub fn text_body(status: StatusCode, text: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            "text/plain; charset=utf-8".to_string(),
        );
        Self::new(status, headers, text.as_bytes().to_vec())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.contains("application/json"))
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body decoded as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ClientError::DeserializeFailed(e.to_string()))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}
