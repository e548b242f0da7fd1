// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # netchain - Interceptor chain for outbound requests
//!
//! An ordered set of interceptors wraps a single transport call. Each one
//! can observe or edit the request on the way in, post-process the response
//! on the way out, answer on its own without touching the network, or fail
//! the whole exchange.
//!
//! ## Features
//!
//! - Ordered pipeline: registration order is execution order, transport last
//! - Short-circuit: any stage can answer without calling the stages below it
//! - Shared mutation: request edits are seen downstream and by the caller
//! - Distinct chain errors: bounds violations and missing responses are not
//!   confused with errors raised by interceptors
//! - Pluggable transport: reqwest by default, anything implementing
//!   [`Transport`] otherwise
//!
//! ## Example
//!
//! ```rust,no_run
//! use netchain::{HeaderInjector, LoggingInterceptor, NetworkClient, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NetworkClient::http()?;
//!     client
//!         .add_interceptor(LoggingInterceptor::new())
//!         .add_interceptor(HeaderInjector::new().header("x-trace", "1"));
//!
//!     let mut request = Request::get("https://example.com")?;
//!     let response = client.perform_request(&mut request).await?;
//!     println!("Status: {}", response.status);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod network;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpTransport, HttpTransportConfig, Request, RequestBuilder, Response, Transport};

// Network
pub use network::{Chain, Interceptor, NetworkClient, TransportInterceptor};
pub use network::{HeaderInjector, LoggingInterceptor, ResponseValidator};

/// netchain version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
