use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;
use url::Url;

use super::error::TransportError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Boundary between the client facade and the HTTP stack.
///
/// The facade only ever needs a blocking GET returning text or bytes, plus
/// a persistent named-header set it can inspect and extend (the API-key
/// header is injected through this seam). Implement this trait to test the
/// client against a mock, or to route calls through a different HTTP stack.
///
/// Implementations are not required to be thread-safe; callers sharing a
/// transport across threads must serialise access themselves.
pub trait Transport {
    /// Performs a blocking GET and returns the response body as text.
    fn fetch_text(&mut self, url: &Url) -> Result<String, TransportError>;

    /// Performs a blocking GET and returns the raw response bytes.
    fn fetch_bytes(&mut self, url: &Url) -> Result<Vec<u8>, TransportError>;

    /// Sets a request header applied to every subsequent request.
    /// Setting the same header twice replaces the previous value.
    fn set_header(&mut self, name: &str, value: &str);

    /// Returns the current value of a persistent request header, if set.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Default [`Transport`] over a blocking [`reqwest`] client.
///
/// Holds a persistent header map applied to every request; the connection
/// pool is released when the transport is dropped. Non-2xx responses are
/// turned into [`TransportError::Status`] so the caller never has to
/// inspect a status code.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    headers: BTreeMap<String, String>,
}

impl ReqwestTransport {
    /// Creates a transport with the default 30 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialised
    /// (e.g. TLS backend initialisation failure).
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a transport with a custom request timeout.
    ///
    /// Timeout and cancellation semantics live entirely at this layer; the
    /// client facade above imposes none of its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialised.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            headers: BTreeMap::new(),
        })
    }

    fn get(&self, url: &Url) -> Result<reqwest::blocking::Response, TransportError> {
        debug!(url:% = url; "HTTP: GET");
        let mut request = self.client.get(url.clone());
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Failed to read response body".into());
            return Err(TransportError::Status { status, body });
        }
        Ok(response)
    }
}

impl Transport for ReqwestTransport {
    fn fetch_text(&mut self, url: &Url) -> Result<String, TransportError> {
        Ok(self.get(url)?.text()?)
    }

    fn fetch_bytes(&mut self, url: &Url) -> Result<Vec<u8>, TransportError> {
        Ok(self.get(url)?.bytes()?.to_vec())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_header_replaces_previous_value() {
        let mut transport = ReqwestTransport::new().unwrap();
        assert_eq!(transport.header("X-ZAP-API-Key"), None);

        transport.set_header("X-ZAP-API-Key", "first");
        transport.set_header("X-ZAP-API-Key", "second");
        assert_eq!(transport.header("X-ZAP-API-Key"), Some("second"));
    }
}
