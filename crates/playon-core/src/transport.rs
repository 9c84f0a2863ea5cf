//! The seam outbound requests go through.
//!
//! Implementations never fail in the `Result` sense: every way a request can
//! go wrong is reported as a [`TransportResult`] for the interpreter to judge.

use std::future::Future;

use crate::models::RequestDescriptor;
use crate::response::TransportResult;

/// Sends a built request and reports what came back.
pub trait Transport: Send + Sync {
    fn send(&self, request: &RequestDescriptor) -> impl Future<Output = TransportResult> + Send;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &RequestDescriptor) -> impl Future<Output = TransportResult> + Send {
        (**self).send(request)
    }
}
