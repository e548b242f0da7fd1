// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Ready-made interceptors
//!
//! Logging, header injection and response validation. None of them are
//! required by the chain; they are ordinary [`Interceptor`] implementations.

use async_trait::async_trait;
use reqwest::Method;

use super::chain::{Chain, Interceptor};
use crate::error::{Error, Result};
use crate::http::{headers, Response};

/// Logs every request by method class, and optionally the response status
#[derive(Debug, Clone, Default)]
pub struct LoggingInterceptor {
    log_responses: bool,
}

impl LoggingInterceptor {
    /// Create a new logging interceptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log the status of each response
    pub fn with_responses(mut self) -> Self {
        self.log_responses = true;
        self
    }
}

fn method_class(method: &Method) -> &'static str {
    match *method {
        Method::HEAD | Method::GET => "HEAD / GET",
        Method::POST | Method::PUT | Method::DELETE => "POST / PUT / DELETE",
        _ => "other",
    }
}

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, chain: Chain<'_>) -> Result<Option<Response>> {
        let request = chain.request();
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            "{} is detected",
            method_class(&request.method)
        );

        if !self.log_responses {
            return chain.proceed().await.map(Some);
        }

        let url = request.url.clone();
        let response = chain.proceed().await?;
        tracing::info!(
            url = %url,
            status = response.status,
            time_ms = response.network_time_ms,
            "Response"
        );
        Ok(Some(response))
    }

    fn name(&self) -> &str {
        "logging"
    }
}

/// Sets fixed headers on every request before it moves on
#[derive(Debug, Clone, Default)]
pub struct HeaderInjector {
    headers: Vec<(String, String)>,
}

impl HeaderInjector {
    /// Create an injector with no headers
    pub fn new() -> Self {
        Self::default()
    }

    /// Injector that disables caching along the way
    pub fn no_cache() -> Self {
        Self::new().header(headers::CACHE_CONTROL, "no-store no-cache")
    }

    /// Add custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a bearer token
    pub fn bearer_token(self, token: impl AsRef<str>) -> Self {
        self.header(headers::AUTHORIZATION, format!("Bearer {}", token.as_ref()))
    }

    /// Add basic auth
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let encoded = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            format!("{}:{}", username, password),
        );
        self.header(headers::AUTHORIZATION, format!("Basic {}", encoded))
    }
}

#[async_trait]
impl Interceptor for HeaderInjector {
    async fn intercept(&self, mut chain: Chain<'_>) -> Result<Option<Response>> {
        let request = chain.request_mut();
        for (name, value) in &self.headers {
            request.headers.insert(name.clone(), value.clone());
        }
        chain.proceed().await.map(Some)
    }

    fn name(&self) -> &str {
        "header-injector"
    }
}

/// Rejects responses with an unexpected status or an empty payload
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    expected_status: u16,
    allow_empty_body: bool,
}

impl Default for ResponseValidator {
    fn default() -> Self {
        Self {
            expected_status: 200,
            allow_empty_body: false,
        }
    }
}

impl ResponseValidator {
    /// Require status 200 and a non-empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a different status
    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Accept responses without a payload
    pub fn allow_empty_body(mut self) -> Self {
        self.allow_empty_body = true;
        self
    }

    fn validate(&self, response: &Response) -> Result<()> {
        if response.status != self.expected_status {
            return Err(Error::UnexpectedStatus {
                status: response.status,
                expected: self.expected_status,
            });
        }
        if !self.allow_empty_body && response.is_empty() {
            return Err(Error::EmptyBody {
                status: response.status,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Interceptor for ResponseValidator {
    async fn intercept(&self, chain: Chain<'_>) -> Result<Option<Response>> {
        let response = chain.proceed().await?;
        self.validate(&response)?;
        Ok(Some(response))
    }

    fn name(&self) -> &str {
        "response-validator"
    }
}
