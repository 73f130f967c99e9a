//! Declarative description of the remote API surface.
//!
//! The daemon addresses every call as `component / operation kind /
//! operation name`. Rather than one hand-written wrapper per subsystem,
//! the known operations live in a flat table ([`endpoints::ALL`]) of
//! [`Endpoint`] descriptors, and
//! [`ZapClient::invoke`](crate::ZapClient::invoke) dispatches any of them
//! generically after validating the argument names.

pub mod endpoints;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ZapError;

/// The kind segment of an operation path.
///
/// Views read state, actions change it, and `other`-kind operations return
/// a raw payload (reports, downloads) instead of structured XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    View,
    Action,
    Other,
}

impl OperationKind {
    /// The literal path segment the daemon expects.
    pub fn as_segment(&self) -> &'static str {
        match self {
            OperationKind::View => "view",
            OperationKind::Action => "action",
            OperationKind::Other => "other",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

/// One remote operation: its address plus the parameter names it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Remote subsystem, e.g. `core` or `spider`.
    pub component: &'static str,
    /// Whether the operation is a view, an action, or a raw-payload call.
    pub kind: OperationKind,
    /// Operation name within the component.
    pub name: &'static str,
    /// Parameter names the operation accepts. The API key is never listed;
    /// the client injects it itself.
    pub params: &'static [&'static str],
}

impl Endpoint {
    /// Builds the parameter map for one invocation, rejecting argument
    /// names the endpoint does not declare.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::UnknownParameter`] for an undeclared name.
    pub fn assemble(&self, args: &[(&str, &str)]) -> Result<BTreeMap<String, String>, ZapError> {
        let mut params = BTreeMap::new();
        for (name, value) in args {
            if !self.params.iter().any(|param| param == name) {
                return Err(ZapError::UnknownParameter {
                    component: self.component,
                    operation: self.name,
                    name: (*name).to_string(),
                });
            }
            params.insert((*name).to_string(), (*value).to_string());
        }
        Ok(params)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.component, self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EP: Endpoint = Endpoint {
        component: "spider",
        kind: OperationKind::Action,
        name: "scan",
        params: &["url", "maxChildren", "recurse"],
    };

    #[test]
    fn assemble_accepts_declared_names() {
        let params = EP
            .assemble(&[("url", "http://target.example"), ("recurse", "true")])
            .unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("url").map(String::as_str),
            Some("http://target.example")
        );
    }

    #[test]
    fn assemble_rejects_undeclared_names() {
        let error = EP.assemble(&[("depth", "3")]).unwrap_err();
        assert!(matches!(
            error,
            ZapError::UnknownParameter {
                component: "spider",
                operation: "scan",
                ..
            }
        ));
    }

    #[test]
    fn display_renders_the_operation_path() {
        assert_eq!(EP.to_string(), "spider/action/scan");
        assert_eq!(OperationKind::View.to_string(), "view");
    }
}
