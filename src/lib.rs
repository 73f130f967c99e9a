//! Client bindings for the OWASP ZAP (Zed Attack Proxy) HTTP control API.
//!
//! ZAP exposes its control surface as plain HTTP GET endpoints on a local
//! proxy address. This crate builds correctly escaped request URLs, injects
//! the API key, and decodes the XML responses into a generic response tree
//! ([`ApiResponse`]) or strongly typed records such as [`Alert`].
//!
//! ```rust,no_run
//! use zap_client::{ClientConfig, ZapClient};
//!
//! # fn main() -> Result<(), zap_client::ZapError> {
//! let mut client = ZapClient::new(ClientConfig::new("zap", 80, "my-api-key"))?;
//!
//! let alerts = client.get_alerts("http://target.example", 0, 10, "")?;
//! for alert in alerts {
//!     println!("[{}] {}", alert.risk, alert.alert);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod model;
pub mod response;

pub use crate::client::{ClientConfig, ZapClient};
pub use crate::error::ZapError;
pub use crate::model::{Alert, FieldFormatError, Level};
pub use crate::response::{ApiResponse, DecodeError};
