//! Error types for transport operations.
//!
//! This module defines the [`TransportError`] enum covering every failure
//! mode of the HTTP round-trip to the ZAP daemon.

use thiserror::Error;

/// Errors that can occur while talking to the ZAP endpoint.
///
/// All variants implement [`std::error::Error`] and [`std::fmt::Display`]
/// through the `thiserror` derive macro. Transport failures are terminal
/// for the call that produced them; no retry happens at this layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// Typical causes:
    /// - Connection refused (ZAP not running, wrong proxy address)
    /// - Connection timeout
    /// - DNS resolution failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The daemon returned a non-success HTTP status code.
    ///
    /// Contains both the status and the response body for debugging.
    /// ZAP signals a bad or missing API key as `4xx` on this path.
    #[error("Server error {status}: {body}")]
    Status {
        /// The HTTP status code returned by the daemon.
        status: reqwest::StatusCode,
        /// The response body, which may contain error details.
        body: String,
    },

    /// Failed to parse or construct a URL.
    ///
    /// Occurs when the configured host/port do not form a valid base URL,
    /// or when a caller-supplied URL is malformed.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}
