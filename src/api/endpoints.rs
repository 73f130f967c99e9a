//! Table of known daemon operations.
//!
//! One [`Endpoint`] entry per remote operation, grouped by component. The
//! table covers the subsystems the client is commonly driven against;
//! operations not listed here can still be reached through
//! [`ZapClient::call_api`](crate::ZapClient::call_api) directly.

use super::{Endpoint, OperationKind};

macro_rules! endpoint {
    ($component:literal, $kind:ident, $name:literal, [$($param:literal),*]) => {
        Endpoint {
            component: $component,
            kind: OperationKind::$kind,
            name: $name,
            params: &[$($param),*],
        }
    };
}

/// Every operation the table knows about.
pub const ALL: &[Endpoint] = &[
    // core
    endpoint!("core", View, "alerts", ["baseurl", "start", "count", "riskId"]),
    endpoint!("core", View, "numberOfAlerts", ["baseurl", "riskId"]),
    endpoint!("core", View, "hosts", []),
    endpoint!("core", View, "sites", []),
    endpoint!("core", View, "urls", ["baseurl"]),
    endpoint!("core", View, "version", []),
    endpoint!("core", Action, "accessUrl", ["url", "followRedirects"]),
    endpoint!("core", Action, "newSession", ["name", "overwrite"]),
    endpoint!("core", Action, "loadSession", ["name"]),
    endpoint!("core", Action, "deleteAllAlerts", []),
    endpoint!("core", Action, "shutdown", []),
    endpoint!("core", Other, "htmlreport", []),
    endpoint!("core", Other, "xmlreport", []),
    endpoint!("core", Other, "proxy.pac", []),
    // spider
    endpoint!("spider", View, "status", ["scanId"]),
    endpoint!("spider", View, "results", ["scanId"]),
    endpoint!("spider", View, "scans", []),
    endpoint!(
        "spider",
        Action,
        "scan",
        ["url", "maxChildren", "recurse", "contextName", "subtreeOnly"]
    ),
    endpoint!("spider", Action, "stop", ["scanId"]),
    endpoint!("spider", Action, "pause", ["scanId"]),
    endpoint!("spider", Action, "resume", ["scanId"]),
    // ascan (active scanner)
    endpoint!("ascan", View, "status", ["scanId"]),
    endpoint!("ascan", View, "scanProgress", ["scanId"]),
    endpoint!("ascan", View, "scans", []),
    endpoint!(
        "ascan",
        Action,
        "scan",
        ["url", "recurse", "inScopeOnly", "scanPolicyName", "method", "postData"]
    ),
    endpoint!("ascan", Action, "stop", ["scanId"]),
    endpoint!("ascan", Action, "pause", ["scanId"]),
    endpoint!("ascan", Action, "resume", ["scanId"]),
    // pscan (passive scanner)
    endpoint!("pscan", View, "recordsToScan", []),
    endpoint!("pscan", View, "scanners", []),
    endpoint!("pscan", Action, "setEnabled", ["enabled"]),
    // context
    endpoint!("context", View, "contextList", []),
    endpoint!("context", View, "context", ["contextName"]),
    endpoint!("context", Action, "newContext", ["contextName"]),
    endpoint!("context", Action, "includeInContext", ["contextName", "regex"]),
    endpoint!("context", Action, "excludeFromContext", ["contextName", "regex"]),
    // search
    endpoint!(
        "search",
        View,
        "urlsByUrlRegex",
        ["regex", "baseurl", "start", "count"]
    ),
    endpoint!(
        "search",
        View,
        "messagesByResponseRegex",
        ["regex", "baseurl", "start", "count"]
    ),
    // stats
    endpoint!("stats", View, "stats", ["keyPrefix"]),
    endpoint!("stats", Action, "clearStats", ["keyPrefix"]),
    // autoupdate
    endpoint!("autoupdate", View, "latestVersionNumber", []),
    endpoint!("autoupdate", View, "isLatestVersion", []),
    endpoint!("autoupdate", Action, "downloadLatestRelease", []),
    // acsrf (anti-CSRF tokens)
    endpoint!("acsrf", View, "optionTokensNames", []),
    endpoint!("acsrf", Action, "addOptionToken", ["String"]),
    endpoint!("acsrf", Action, "removeOptionToken", ["String"]),
];

/// Looks an operation up by component and name.
///
/// Names are unique within a component across kinds, so the pair is enough
/// to identify an entry.
pub fn find(component: &str, name: &str) -> Option<&'static Endpoint> {
    ALL.iter()
        .find(|endpoint| endpoint.component == component && endpoint.name == name)
}
