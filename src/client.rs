//! Client facade: configuration plus the dispatch pipeline.
//!
//! Each call is one blocking round-trip: build the request URL, ensure the
//! API-key header, fetch through the [`Transport`], decode. The facade
//! holds no locks of its own; the transport is the only piece needing
//! external synchronisation if an instance is ever shared.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{Endpoint, OperationKind};
use crate::error::ZapError;
use crate::http::url_builder::build_api_url;
use crate::http::{ReqwestTransport, Transport, TransportError};
use crate::model::Alert;
use crate::response::{ApiResponse, parse_response};

/// Connection settings for one daemon instance.
///
/// Set once at construction and read-only afterwards. The conventional
/// proxy address is host `zap` on port 80, but both are explicit so the
/// client can be pointed at any listener (including a test server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host the daemon's proxy listens on.
    pub host: String,
    /// Port the daemon's proxy listens on.
    pub port: u16,
    /// API key the daemon was started with; blank disables key injection.
    pub api_key: String,
}

impl ClientConfig {
    /// Request header the daemon reads the API key from.
    pub const API_KEY_HEADER: &'static str = "X-ZAP-API-Key";
    /// Format segment selecting structured XML responses.
    pub const STRUCTURED_FORMAT: &'static str = "xml";
    /// Format segment selecting raw binary passthrough.
    pub const OTHER_FORMAT: &'static str = "other";

    /// Creates a configuration for the given proxy address and key.
    pub fn new(host: impl Into<String>, port: u16, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            api_key: api_key.into(),
        }
    }

    fn base_url(&self) -> Result<Url, TransportError> {
        Ok(Url::parse(&format!("http://{}:{}/", self.host, self.port))?)
    }
}

/// Blocking client for the daemon's control API.
///
/// Generic over its [`Transport`] so tests can substitute a mock; the
/// default is [`ReqwestTransport`]. Dispatch methods take `&mut self`
/// because the API-key injection path mutates the transport's persistent
/// header set. Dropping the client releases the transport's connection
/// resources exactly once.
pub struct ZapClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    base_url: Url,
    transport: T,
}

impl ZapClient<ReqwestTransport> {
    /// Creates a client over the default blocking HTTP transport.
    ///
    /// # Errors
    ///
    /// Fails when the configured host/port do not form a valid URL or the
    /// HTTP client cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self, ZapError> {
        let transport = ReqwestTransport::new()?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> ZapClient<T> {
    /// Creates a client over a caller-supplied transport.
    ///
    /// The base URL is validated here, once; later calls cannot fail on
    /// address assembly.
    ///
    /// # Errors
    ///
    /// Fails when the configured host/port do not form a valid URL.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ZapError> {
        let base_url = config.base_url()?;
        Ok(Self {
            config,
            base_url,
            transport,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Low-level structured call: addresses one operation, decodes the XML
    /// body into the generic response tree.
    ///
    /// # Errors
    ///
    /// Transport failures propagate verbatim; a body that is not
    /// well-formed XML is a [`DecodeError`](crate::DecodeError).
    pub fn call_api(
        &mut self,
        component: &str,
        kind: OperationKind,
        operation_name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<ApiResponse, ZapError> {
        let url = self.prepare_request(
            ClientConfig::STRUCTURED_FORMAT,
            component,
            kind,
            operation_name,
            params,
        );
        debug!(component = component, operation = operation_name; "API: structured call");
        let body = self.transport.fetch_text(&url)?;
        Ok(parse_response(&body)?)
    }

    /// Low-level raw call: same addressing, but the `other` format segment
    /// and an undecoded byte payload (reports, downloads, proxy.pac).
    ///
    /// # Errors
    ///
    /// Transport failures propagate verbatim.
    pub fn call_api_other(
        &mut self,
        component: &str,
        kind: OperationKind,
        operation_name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<Vec<u8>, ZapError> {
        let url = self.prepare_request(
            ClientConfig::OTHER_FORMAT,
            component,
            kind,
            operation_name,
            params,
        );
        debug!(component = component, operation = operation_name; "API: raw call");
        Ok(self.transport.fetch_bytes(&url)?)
    }

    /// Dispatches a table-described operation with named arguments.
    ///
    /// For an [`OperationKind::Other`] endpoint use
    /// [`invoke_other`](Self::invoke_other) instead; this method always
    /// requests the structured format.
    ///
    /// # Errors
    ///
    /// [`ZapError::UnknownParameter`] for an argument name the endpoint
    /// does not declare, otherwise as [`call_api`](Self::call_api).
    pub fn invoke(
        &mut self,
        endpoint: &Endpoint,
        args: &[(&str, &str)],
    ) -> Result<ApiResponse, ZapError> {
        let params = endpoint.assemble(args)?;
        self.call_api(endpoint.component, endpoint.kind, endpoint.name, &params)
    }

    /// Dispatches a table-described operation, returning the raw payload.
    ///
    /// # Errors
    ///
    /// As [`invoke`](Self::invoke), but via the raw path.
    pub fn invoke_other(
        &mut self,
        endpoint: &Endpoint,
        args: &[(&str, &str)],
    ) -> Result<Vec<u8>, ZapError> {
        let params = endpoint.assemble(args)?;
        self.call_api_other(endpoint.component, endpoint.kind, endpoint.name, &params)
    }

    /// Fetches an arbitrary URL through the transport, discarding the body.
    ///
    /// Used to drive traffic through the proxy (so the passive scanner
    /// sees it) without caring about the response.
    ///
    /// # Errors
    ///
    /// [`TransportError::Url`] for a malformed URL; transport failures
    /// propagate verbatim.
    pub fn access_url(&mut self, url: &str) -> Result<(), ZapError> {
        let url = Url::parse(url).map_err(TransportError::from)?;
        self.transport.fetch_text(&url)?;
        Ok(())
    }

    /// Fetches the alerts raised against `base_url` and maps them to typed
    /// records, preserving the daemon's order.
    ///
    /// `risk_id` filters by risk when non-blank. A response that is not a
    /// collection (no alerts recorded yet) yields an empty vector.
    ///
    /// # Errors
    ///
    /// Transport and decode failures propagate; a record with a missing or
    /// malformed numeric field aborts with a
    /// [`FieldFormatError`](crate::FieldFormatError).
    pub fn get_alerts(
        &mut self,
        base_url: &str,
        start: u32,
        count: u32,
        risk_id: &str,
    ) -> Result<Vec<Alert>, ZapError> {
        let mut params = BTreeMap::new();
        params.insert("baseurl".to_string(), base_url.to_string());
        params.insert("start".to_string(), start.to_string());
        params.insert("count".to_string(), count.to_string());
        if !risk_id.trim().is_empty() {
            params.insert("riskId".to_string(), risk_id.to_string());
        }

        let response = self.call_api("core", OperationKind::View, "alerts", &params)?;
        match response {
            ApiResponse::List { .. } => Ok(Alert::from_list(&response)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Builds the request URL and ensures the API-key header is present.
    ///
    /// The key is sent both as a header and as a query parameter: some
    /// endpoints read one, some the other. A header value already set by
    /// the caller is never overwritten, but the query parameter is still
    /// appended.
    fn prepare_request(
        &mut self,
        format: &str,
        component: &str,
        kind: OperationKind,
        operation_name: &str,
        params: &BTreeMap<String, String>,
    ) -> Url {
        let url = build_api_url(
            &self.base_url,
            &self.config.api_key,
            format,
            component,
            kind.as_segment(),
            operation_name,
            params,
        );

        let header_blank = self
            .transport
            .header(ClientConfig::API_KEY_HEADER)
            .is_none_or(|value| value.trim().is_empty());
        if header_blank {
            self.transport
                .set_header(ClientConfig::API_KEY_HEADER, &self.config.api_key);
        }

        url
    }
}
