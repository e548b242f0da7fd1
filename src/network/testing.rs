// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Recorder interceptors and a scripted transport for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::chain::{Chain, Interceptor};
use crate::error::{Error, Result};
use crate::http::{Request, Response, Transport};

/// What a recorder does once invoked
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Pass the request on untouched
    Proceed,
    /// Fail with `Error::Other("scripted failure")`
    Fail,
    /// Short-circuit with this response
    Respond(Response),
    /// Break the contract by returning nothing
    NoResponse,
    /// Require exactly these request headers, then proceed
    AssertRequestHeaders(HashMap<String, String>),
    /// Set a request header, then proceed
    SetRequestHeader(String, String),
    /// Proceed, then require exactly these response headers
    AssertResponseHeaders(HashMap<String, String>),
    /// Proceed, then set a response header
    SetResponseHeader(String, String),
}

impl Behavior {
    pub fn assert_request_headers(pairs: &[(&str, &str)]) -> Self {
        Behavior::AssertRequestHeaders(to_map(pairs))
    }

    pub fn set_request_header(name: &str, value: &str) -> Self {
        Behavior::SetRequestHeader(name.to_string(), value.to_string())
    }

    pub fn assert_response_headers(pairs: &[(&str, &str)]) -> Self {
        Behavior::AssertResponseHeaders(to_map(pairs))
    }

    pub fn set_response_header(name: &str, value: &str) -> Self {
        Behavior::SetResponseHeader(name.to_string(), value.to_string())
    }
}

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn check_headers(
    actual: &HashMap<String, String>,
    expected: &HashMap<String, String>,
) -> Result<()> {
    if actual != expected {
        return Err(Error::other(format!(
            "header mismatch: expected {:?}, got {:?}",
            expected, actual
        )));
    }
    Ok(())
}

/// Interceptor that records how often it ran
pub struct Recorder {
    label: String,
    behavior: Behavior,
    calls: AtomicUsize,
    journal: Option<Arc<Mutex<Vec<String>>>>,
}

impl Recorder {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            label: "recorder".to_string(),
            behavior,
            calls: AtomicUsize::new(0),
            journal: None,
        }
    }

    /// Append `label` to `journal` on every invocation
    pub fn journaled(label: &str, behavior: Behavior, journal: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            label: label.to_string(),
            journal: Some(journal),
            ..Self::new(behavior)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn assert_invoked(&self) {
        assert_eq!(self.calls(), 1, "{} should run exactly once", self.label);
    }

    pub fn assert_not_invoked(&self) {
        assert_eq!(self.calls(), 0, "{} should not run", self.label);
    }
}

#[async_trait]
impl Interceptor for Recorder {
    async fn intercept(&self, mut chain: Chain<'_>) -> Result<Option<Response>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref journal) = self.journal {
            journal.lock().push(self.label.clone());
        }

        match &self.behavior {
            Behavior::Proceed => chain.proceed().await.map(Some),
            Behavior::Fail => Err(Error::other("scripted failure")),
            Behavior::Respond(response) => Ok(Some(response.clone())),
            Behavior::NoResponse => Ok(None),
            Behavior::AssertRequestHeaders(expected) => {
                check_headers(&chain.request().headers, expected)?;
                chain.proceed().await.map(Some)
            }
            Behavior::SetRequestHeader(name, value) => {
                chain
                    .request_mut()
                    .headers
                    .insert(name.clone(), value.clone());
                chain.proceed().await.map(Some)
            }
            Behavior::AssertResponseHeaders(expected) => {
                let response = chain.proceed().await?;
                check_headers(&response.headers, expected)?;
                Ok(Some(response))
            }
            Behavior::SetResponseHeader(name, value) => {
                let mut response = chain.proceed().await?;
                response.headers.insert(name.clone(), value.clone());
                Ok(Some(response))
            }
        }
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Build one recorder per behavior
pub fn recorder_list(behaviors: Vec<Behavior>) -> Vec<Arc<Recorder>> {
    behaviors
        .into_iter()
        .map(|b| Arc::new(Recorder::new(b)))
        .collect()
}

pub fn sample_request() -> Request {
    Request {
        method: reqwest::Method::GET,
        url: url::Url::parse("https://api.example.com/items").expect("static url"),
        headers: HashMap::new(),
        body: None,
        timeout: None,
    }
}

/// Transport that answers from a script instead of the network
pub struct ScriptedTransport {
    reply: Mutex<Option<Result<Response>>>,
    default: Response,
    calls: AtomicUsize,
    seen_headers: Mutex<Vec<HashMap<String, String>>>,
    journal: Option<Arc<Mutex<Vec<String>>>>,
}

impl ScriptedTransport {
    /// Always answer with a clone of `response`
    pub fn responding(response: Response) -> Self {
        Self {
            reply: Mutex::new(None),
            default: response,
            calls: AtomicUsize::new(0),
            seen_headers: Mutex::new(Vec::new()),
            journal: None,
        }
    }

    /// Fail the first call with `error`
    pub fn failing(error: Error) -> Self {
        let transport = Self::responding(Response::ok(""));
        *transport.reply.lock() = Some(Err(error));
        transport
    }

    pub fn with_journal(mut self, journal: Arc<Mutex<Vec<String>>>) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Request headers observed on each call
    pub fn seen_headers(&self) -> Vec<HashMap<String, String>> {
        self.seen_headers.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: &Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_headers.lock().push(request.headers.clone());
        if let Some(ref journal) = self.journal {
            journal.lock().push("transport".to_string());
        }

        let reply = self.reply.lock().take();
        reply.unwrap_or_else(|| Ok(self.default.clone()))
    }
}
