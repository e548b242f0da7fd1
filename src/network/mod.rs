// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interception pipeline
//!
//! Interceptors registered on a [`NetworkClient`] wrap the transport call in
//! registration order, each one free to edit, answer or reject the request.

mod chain;
mod client;
mod interceptors;

#[cfg(test)]
mod testing;

pub use chain::{Chain, Interceptor};
pub use client::{NetworkClient, TransportInterceptor};
pub use interceptors::{HeaderInjector, LoggingInterceptor, ResponseValidator};
