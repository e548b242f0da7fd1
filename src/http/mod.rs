// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/response model and the network transport
//!
//! The chain only touches method, headers, status and payload. Everything
//! connection-related stays inside the [`Transport`] implementation.

mod request;
mod response;
mod transport;

use std::time::Duration;

pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, HttpTransportConfig, Transport};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("netchain/", env!("CARGO_PKG_VERSION"));

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const AUTHORIZATION: &str = "authorization";
    pub const CACHE_CONTROL: &str = "cache-control";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const USER_AGENT: &str = "user-agent";
}
