// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Response produced by the transport or by a short-circuiting interceptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body
    pub body: Bytes,
    /// Server answered 304 and the cached copy is still valid
    pub not_modified: bool,
    /// Round-trip time in milliseconds
    pub network_time_ms: u64,
}

impl Response {
    /// Create a new response
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            not_modified: status == 304,
            network_time_ms: 0,
        }
    }

    /// Create a 200 response with the given body and no headers
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200, HashMap::new(), body)
    }

    /// Set a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the measured round-trip time
    pub fn with_network_time(mut self, millis: u64) -> Self {
        self.network_time_ms = millis;
        self
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get body as text
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| Error::Other(e.to_string()))
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }

    /// Get a header value, matching the name case-insensitively
    ///
    /// [`Request::header_value`](super::Request::header_value) is exact-match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get body length
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Check whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status() {
        let resp = Response::ok("");
        assert!(resp.is_success());
        assert!(resp.is_empty());
        assert!(!resp.not_modified);
        assert!(Response::new(304, HashMap::new(), "").not_modified);
    }

    #[test]
    fn test_response_text() {
        let resp = Response::ok("Hello, World!");
        assert_eq!(resp.text().unwrap(), "Hello, World!");
        assert_eq!(resp.body_len(), 13);
    }

    #[test]
    fn test_header_lookup() {
        let resp = Response::ok("{}").with_header("Content-Type", "application/json");
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
        let value: serde_json::Value = resp.json().unwrap();
        assert!(value.is_object());
    }
}
