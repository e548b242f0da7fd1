// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interceptor trait and the chain cursor that drives it
//!
//! A [`Chain`] is an immutable cursor over an ordered interceptor list plus
//! the request in flight. [`Chain::proceed`] consumes the cursor, builds the
//! next one at `index + 1` and hands it to the interceptor at `index`. The
//! response then unwinds back through every stage in reverse order.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::http::{Request, Response};

/// A single stage of the request pipeline
///
/// An interceptor can pass the request on untouched, edit it before
/// proceeding, post-process the response it gets back, answer on its own
/// without proceeding (short-circuit), or fail and abort the traversal.
///
/// Returning `Ok(None)` breaks the contract and surfaces to the caller as
/// [`Error::MissingResponse`].
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use netchain::network::{Chain, Interceptor};
/// use netchain::{Response, Result};
///
/// struct TraceHeader;
///
/// #[async_trait]
/// impl Interceptor for TraceHeader {
///     async fn intercept(&self, mut chain: Chain<'_>) -> Result<Option<Response>> {
///         chain.request_mut().headers.insert("x-trace".into(), "1".into());
///         chain.proceed().await.map(Some)
///     }
/// }
/// ```
///
/// Instances are shared between concurrent traversals, so any state kept on
/// `self` must be synchronized.
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Produce a response for the request held by `chain`
    async fn intercept(&self, chain: Chain<'_>) -> Result<Option<Response>>;

    /// Name used in logs and errors
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Cursor over the interceptor list for one traversal
///
/// The cursor is never mutated or reused: `proceed` takes it by value, so an
/// interceptor can continue the pipeline at most once.
pub struct Chain<'a> {
    request: &'a mut Request,
    interceptors: &'a [Arc<dyn Interceptor>],
    index: isize,
}

impl<'a> Chain<'a> {
    /// Create a cursor at `index`
    ///
    /// The index is not checked here; an out-of-range cursor fails on
    /// `proceed` without touching any interceptor.
    pub fn new(
        request: &'a mut Request,
        interceptors: &'a [Arc<dyn Interceptor>],
        index: isize,
    ) -> Self {
        Self {
            request,
            interceptors,
            index,
        }
    }

    /// The request in flight, including edits made by earlier stages
    pub fn request(&self) -> &Request {
        &*self.request
    }

    /// Mutable access to the request in flight
    pub fn request_mut(&mut self) -> &mut Request {
        &mut *self.request
    }

    /// Index of the interceptor `proceed` will invoke
    pub fn index(&self) -> isize {
        self.index
    }

    /// Total number of stages, terminal included
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Check whether the chain has no stages at all
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Invoke the next stage with the current request
    pub async fn proceed(self) -> Result<Response> {
        let Chain {
            request,
            interceptors,
            index,
        } = self;

        let len = interceptors.len();
        let position = usize::try_from(index)
            .ok()
            .filter(|i| *i < len)
            .ok_or(Error::ChainIndexOutOfBounds { index, len })?;

        let interceptor = &interceptors[position];
        let next = Chain {
            request,
            interceptors,
            index: index + 1,
        };

        tracing::trace!(
            stage = position,
            stages = len,
            interceptor = interceptor.name(),
            "Proceeding"
        );

        interceptor
            .intercept(next)
            .await?
            .ok_or_else(|| Error::missing_response(interceptor.name()))
    }

    /// Replace the request in flight, then invoke the next stage
    ///
    /// The replacement is written through to the caller's request, the same
    /// as any in-place edit.
    pub async fn proceed_with(mut self, request: Request) -> Result<Response> {
        *self.request_mut() = request;
        self.proceed().await
    }
}
