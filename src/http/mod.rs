//! HTTP plumbing for the ZAP control API.
//!
//! This module owns the two pieces that touch the wire-facing side of a
//! call: assembling the request URL and performing the blocking GET.
//!
//! - [`Transport`] - the boundary the client dispatches through; implement
//!   it to substitute a mock or an alternative HTTP stack.
//! - [`ReqwestTransport`] - the default implementation over a blocking
//!   [`reqwest`] client with a persistent request-header set.
//! - [`TransportError`] - connectivity and HTTP-status failures.
//! - `url_builder` - pure assembly of `/{format}/{component}/{kind}/{name}`
//!   URLs with RFC 3986 query escaping.
//!
//! Nothing here knows about response shapes; decoding lives in
//! [`crate::response`].

mod error;
mod transport;
pub(crate) mod url_builder;

pub use error::TransportError;
pub use transport::{ReqwestTransport, Transport};
