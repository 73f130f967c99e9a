//! The alert record and its mapping from a generic response set.
//!
//! Construction is atomic: a record is either fully valid or the mapping
//! fails with a [`FieldFormatError`]. Text fields default to the empty
//! string when absent, level fields default to [`Level::Low`] when absent
//! or blank, and numeric fields have no safe default and must be present.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::ApiResponse;

/// A record could not be built from a response node.
#[derive(Debug, Error)]
pub enum FieldFormatError {
    /// A required field was absent or blank.
    #[error("Missing required field `{field}`")]
    Missing {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A field was present but failed type coercion.
    #[error("Field `{field}` has invalid value `{value}`")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The response node does not have the shape the mapper expects.
    #[error("Expected a {expected} response node, got `{name}`")]
    UnexpectedShape {
        /// The node kind the mapper needs.
        expected: &'static str,
        /// Name of the node actually received.
        name: String,
    },
}

/// Ordered severity level attached to a security finding.
///
/// Used for both the risk and the confidence of an [`Alert`]. Parsing is
/// case-sensitive against the member names.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    /// Lowest level; also the fallback for a blank or absent field.
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Level::Low),
            "Medium" => Ok(Level::Medium),
            "High" => Ok(Level::High),
            _ => Err(format!("Invalid Level: {}", s)),
        }
    }
}

/// One security alert reported by the daemon.
///
/// Read-only snapshot of a `<alert>` record; holds no reference back to the
/// response it was mapped from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Short name of the finding.
    pub alert: String,
    /// URL the finding was raised against.
    pub url: String,
    /// The attack payload, when the finding came from an active rule.
    pub attack: String,
    /// How confident the scanner is in the finding.
    pub confidence: Level,
    /// CWE identifier of the weakness class.
    pub cweid: i32,
    /// Long-form description.
    pub description: String,
    /// The evidence found in the response, if any.
    pub evidence: String,
    /// Free-form additional information.
    pub other: String,
    /// Name of the offending parameter, if any.
    pub param: String,
    /// Reference URLs for the weakness class.
    pub reference: String,
    /// Severity of the finding.
    pub risk: Level,
    /// Suggested remediation.
    pub solution: String,
    /// WASC identifier of the weakness class.
    pub wascid: i32,
}

impl Alert {
    /// Maps one [`ApiResponse::Set`] node to an alert.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldFormatError`] when the node is not a set, a numeric
    /// field is missing or non-numeric, or a level field holds an unknown
    /// name.
    pub fn from_set(node: &ApiResponse) -> Result<Self, FieldFormatError> {
        let ApiResponse::Set { fields, .. } = node else {
            return Err(FieldFormatError::UnexpectedShape {
                expected: "set",
                name: node.name().to_string(),
            });
        };

        Ok(Alert {
            alert: text_field(fields, "alert"),
            url: text_field(fields, "url"),
            attack: text_field(fields, "attack"),
            confidence: level_field(fields, "confidence")?,
            cweid: int_field(fields, "cweid")?,
            description: text_field(fields, "description"),
            evidence: text_field(fields, "evidence"),
            other: text_field(fields, "other"),
            param: text_field(fields, "param"),
            reference: text_field(fields, "reference"),
            risk: level_field(fields, "risk")?,
            solution: text_field(fields, "solution"),
            wascid: int_field(fields, "wascid")?,
        })
    }

    /// Maps an [`ApiResponse::List`] of sets to alerts, preserving source
    /// order. The first bad record aborts the mapping; callers wanting a
    /// lenient pass apply [`Alert::from_set`] per child themselves.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldFormatError`] when the node is not a list or any
    /// child fails to map.
    pub fn from_list(node: &ApiResponse) -> Result<Vec<Self>, FieldFormatError> {
        let ApiResponse::List { items, .. } = node else {
            return Err(FieldFormatError::UnexpectedShape {
                expected: "list",
                name: node.name().to_string(),
            });
        };
        items.iter().map(Alert::from_set).collect()
    }
}

fn text_field(fields: &BTreeMap<String, String>, field: &'static str) -> String {
    fields.get(field).cloned().unwrap_or_default()
}

fn level_field(
    fields: &BTreeMap<String, String>,
    field: &'static str,
) -> Result<Level, FieldFormatError> {
    match fields.get(field).map(|raw| raw.trim()) {
        None => Ok(Level::Low),
        Some("") => Ok(Level::Low),
        Some(raw) => raw.parse().map_err(|_| FieldFormatError::Invalid {
            field,
            value: raw.to_string(),
        }),
    }
}

fn int_field(
    fields: &BTreeMap<String, String>,
    field: &'static str,
) -> Result<i32, FieldFormatError> {
    let raw = fields
        .get(field)
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .ok_or(FieldFormatError::Missing { field })?;
    raw.parse().map_err(|_| FieldFormatError::Invalid {
        field,
        value: raw.to_string(),
    })
}
