//! Generic API response tree.
//!
//! Every structured ZAP response decodes into an [`ApiResponse`]: a scalar
//! value, one record as field/value pairs, or an ordered collection of
//! child nodes. The tree is built once per response by
//! [`parse_response`], is immutable afterwards, and is either inspected
//! directly or handed to the typed mappers in [`crate::model`].

mod parser;

pub use parser::{DecodeError, parse_response};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of a decoded API response.
///
/// Exactly one payload is populated per node, never a mix, and the name is
/// never empty once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiResponse {
    /// A named text value, e.g. `<version>2.16.1</version>`.
    Scalar {
        /// Element tag the value was read from.
        name: String,
        /// Text content; empty string when the element was empty.
        value: String,
    },
    /// One structured record as a field-name to value mapping.
    Set {
        /// Element tag of the record.
        name: String,
        /// Field values keyed by child tag; duplicate tags resolve to the
        /// last occurrence in the document.
        fields: BTreeMap<String, String>,
    },
    /// An ordered collection of child nodes, document order preserved.
    List {
        /// Element tag of the collection.
        name: String,
        /// Child nodes in source order.
        items: Vec<ApiResponse>,
    },
}

impl ApiResponse {
    /// The element tag this node was decoded from.
    pub fn name(&self) -> &str {
        match self {
            ApiResponse::Scalar { name, .. }
            | ApiResponse::Set { name, .. }
            | ApiResponse::List { name, .. } => name,
        }
    }

    /// The text value, when this node is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ApiResponse::Scalar { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The field mapping, when this node is a set.
    pub fn fields(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ApiResponse::Set { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// The child nodes, when this node is a list.
    pub fn items(&self) -> Option<&[ApiResponse]> {
        match self {
            ApiResponse::List { items, .. } => Some(items),
            _ => None,
        }
    }
}
