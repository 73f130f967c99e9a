//! Crate-level error type.
//!
//! Each area of the crate defines its own error enum ([`TransportError`],
//! [`DecodeError`], [`FieldFormatError`]); [`ZapError`] aggregates them at
//! the facade boundary. Errors are surfaced to the caller unmodified: the
//! client never retries, swallows, or downgrades a failure.

use thiserror::Error;

use crate::http::TransportError;
use crate::model::FieldFormatError;
use crate::response::DecodeError;

/// Any failure a [`ZapClient`](crate::ZapClient) call can produce.
#[derive(Debug, Error)]
pub enum ZapError {
    /// The HTTP round-trip failed (connection refused, timeout, non-2xx
    /// status). Propagated verbatim from the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body was not well-formed XML.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A response record was missing a required field or a field failed
    /// type coercion.
    #[error("Field format error: {0}")]
    FieldFormat(#[from] FieldFormatError),

    /// An argument name passed to [`ZapClient::invoke`](crate::ZapClient::invoke)
    /// is not declared by the endpoint.
    #[error("Unknown parameter `{name}` for endpoint {component}/{operation}")]
    UnknownParameter {
        /// Component of the endpoint being invoked.
        component: &'static str,
        /// Operation name of the endpoint being invoked.
        operation: &'static str,
        /// The undeclared argument name.
        name: String,
    },
}
