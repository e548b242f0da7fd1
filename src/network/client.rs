// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network client that assembles and runs the interceptor chain

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::chain::{Chain, Interceptor};
use crate::error::Result;
use crate::http::{HttpTransport, HttpTransportConfig, Request, Response, Transport};

/// Terminal stage that hands the request to the transport
///
/// Appended to every chain at build time and never registered by callers.
pub struct TransportInterceptor {
    transport: Arc<dyn Transport>,
}

impl TransportInterceptor {
    /// Wrap a transport as the last stage of a chain
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl Interceptor for TransportInterceptor {
    async fn intercept(&self, chain: Chain<'_>) -> Result<Option<Response>> {
        self.transport.execute(chain.request()).await.map(Some)
    }

    fn name(&self) -> &str {
        "transport"
    }
}

/// Client owning the interceptor registry
///
/// Interceptors run in registration order, the earliest registered being
/// the outermost. Each call to [`perform_request`](Self::perform_request)
/// works on its own copy of the registry, so registering while requests are
/// in flight never affects them.
///
/// # Example
///
/// ```rust,no_run
/// use netchain::{HeaderInjector, LoggingInterceptor, NetworkClient, Request, ResponseValidator};
///
/// #[tokio::main]
/// async fn main() -> netchain::Result<()> {
///     let client = NetworkClient::http()?;
///     client
///         .add_interceptor(LoggingInterceptor::new())
///         .add_interceptor(HeaderInjector::no_cache())
///         .add_interceptor(ResponseValidator::new());
///
///     let mut request = Request::get("https://example.com")?;
///     let response = client.perform_request(&mut request).await?;
///     println!("{} ({} bytes)", response.status, response.body_len());
///     Ok(())
/// }
/// ```
pub struct NetworkClient {
    transport: Arc<dyn Transport>,
    interceptors: RwLock<Vec<Arc<dyn Interceptor>>>,
}

impl NetworkClient {
    /// Create a client around a transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_transport(Arc::new(transport))
    }

    /// Create a client around a shared transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            interceptors: RwLock::new(Vec::new()),
        }
    }

    /// Create a client backed by the default HTTP transport
    pub fn http() -> Result<Self> {
        Ok(Self::new(HttpTransport::new()?))
    }

    /// Create a client backed by an HTTP transport with custom configuration
    pub fn http_with_config(config: HttpTransportConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::with_config(config)?))
    }

    /// Append an interceptor
    pub fn add_interceptor(&self, interceptor: impl Interceptor + 'static) -> &Self {
        self.add_shared_interceptor(Arc::new(interceptor))
    }

    /// Append an interceptor that is also held elsewhere
    pub fn add_shared_interceptor(&self, interceptor: Arc<dyn Interceptor>) -> &Self {
        self.interceptors.write().push(interceptor);
        self
    }

    /// Append several interceptors, keeping their iteration order
    pub fn add_interceptors<I>(&self, interceptors: I) -> &Self
    where
        I: IntoIterator<Item = Arc<dyn Interceptor>>,
    {
        self.interceptors.write().extend(interceptors);
        self
    }

    /// Number of registered interceptors, terminal excluded
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.read().len()
    }

    /// Names of registered interceptors in execution order
    pub fn interceptor_names(&self) -> Vec<String> {
        self.interceptors
            .read()
            .iter()
            .map(|i| i.name().to_string())
            .collect()
    }

    /// Run `request` through every registered interceptor and the transport
    ///
    /// Edits made to the request by interceptors stay visible in `request`
    /// after this returns. Errors from any stage come back unchanged.
    pub async fn perform_request(&self, request: &mut Request) -> Result<Response> {
        let mut interceptors = self.interceptors.read().clone();
        interceptors.push(Arc::new(TransportInterceptor::new(self.transport.clone())));

        let start = Instant::now();
        let result = Chain::new(request, &interceptors, 0).proceed().await;

        match &result {
            Ok(response) => tracing::debug!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                stages = interceptors.len(),
                time_ms = start.elapsed().as_millis() as u64,
                "Request completed"
            ),
            Err(e) => tracing::debug!(
                method = %request.method,
                url = %request.url,
                error = %e,
                "Request failed"
            ),
        }

        result
    }

    /// Run independent requests concurrently, one chain each
    pub async fn perform_all(&self, requests: &mut [Request]) -> Vec<Result<Response>> {
        let futures: Vec<_> = requests
            .iter_mut()
            .map(|r| self.perform_request(r))
            .collect();
        futures::future::join_all(futures).await
    }
}
