//! One-shot decoder from a raw XML body to the [`ApiResponse`] tree.
//!
//! The daemon's XML has no schema beyond its shape, so classification is
//! structural:
//!
//! - an element with no child elements is a **scalar**;
//! - an element whose children all repeat one tag (2+ occurrences) is a
//!   **list**;
//! - anything else is a **set**, one field per child tag, with best-effort
//!   extraction for mixed or irregular shapes.
//!
//! Parsing operates on the fully received body; there is no streaming.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};
use thiserror::Error;

use super::ApiResponse;

/// The response body could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not well-formed XML.
    #[error("Malformed response body: {0}")]
    Malformed(#[from] roxmltree::Error),
}

/// Decodes a raw response body into its root [`ApiResponse`] node.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the body is not well-formed XML.
pub fn parse_response(raw: &str) -> Result<ApiResponse, DecodeError> {
    let document = Document::parse(raw)?;
    Ok(parse_node(document.root_element()))
}

fn parse_node(node: Node) -> ApiResponse {
    let name = node.tag_name().name().to_string();
    let children: Vec<Node> = node.children().filter(Node::is_element).collect();

    if children.is_empty() {
        return ApiResponse::Scalar {
            name,
            value: node.text().unwrap_or("").to_string(),
        };
    }

    if is_repetition(&children) {
        return ApiResponse::List {
            name,
            items: children.iter().map(|child| parse_node(*child)).collect(),
        };
    }

    let mut fields = BTreeMap::new();
    for child in children {
        // Last-seen occurrence wins on duplicate tags.
        fields.insert(child.tag_name().name().to_string(), resolved_text(child));
    }
    ApiResponse::Set { name, fields }
}

/// A collection is recognised by its children repeating one common tag.
fn is_repetition(children: &[Node]) -> bool {
    children.len() >= 2
        && children
            .iter()
            .all(|child| child.tag_name().name() == children[0].tag_name().name())
}

/// Field value of a set child: its own text for a leaf, otherwise the
/// concatenated descendant text (best-effort extraction for irregular
/// shapes).
fn resolved_text(node: Node) -> String {
    if node.children().any(|child| child.is_element()) {
        node.descendants()
            .filter(Node::is_text)
            .filter_map(|text| text.text())
            .collect()
    } else {
        node.text().unwrap_or("").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_without_children_is_scalar() {
        let response = parse_response("<version>2.16.1</version>").unwrap();
        assert_eq!(
            response,
            ApiResponse::Scalar {
                name: "version".into(),
                value: "2.16.1".into(),
            }
        );
    }

    #[test]
    fn empty_element_is_scalar_with_empty_value() {
        let response = parse_response("<version/>").unwrap();
        assert_eq!(response.as_scalar(), Some(""));
        assert_eq!(response.name(), "version");
    }

    #[test]
    fn distinct_tagged_children_form_a_set() {
        let response =
            parse_response("<alert><risk>High</risk><cweid>89</cweid></alert>").unwrap();
        let fields = response.fields().unwrap();
        assert_eq!(fields.get("risk").map(String::as_str), Some("High"));
        assert_eq!(fields.get("cweid").map(String::as_str), Some("89"));
    }

    #[test]
    fn duplicate_set_field_resolves_to_last_occurrence() {
        // Mixed tags keep this a set; the repeated `risk` takes its last value.
        let response =
            parse_response("<alert><risk>Low</risk><url>u</url><risk>High</risk></alert>")
                .unwrap();
        let fields = response.fields().unwrap();
        assert_eq!(fields.get("risk").map(String::as_str), Some("High"));
        assert_eq!(fields.get("url").map(String::as_str), Some("u"));
    }

    #[test]
    fn uniform_pair_of_children_is_a_list_not_a_set() {
        let response = parse_response("<urls><url>a</url><url>b</url></urls>").unwrap();
        let items = response.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_scalar(), Some("a"));
        assert_eq!(items[1].as_scalar(), Some("b"));
    }

    #[test]
    fn repeated_tags_form_a_list_in_source_order() {
        let body = "<alerts>\
                    <alert><risk>High</risk></alert>\
                    <alert><risk>Medium</risk></alert>\
                    <alert><risk>Low</risk></alert>\
                    </alerts>";
        let response = parse_response(body).unwrap();
        let items = response.items().unwrap();
        assert_eq!(items.len(), 3);
        let risks: Vec<&str> = items
            .iter()
            .map(|item| item.fields().unwrap().get("risk").unwrap().as_str())
            .collect();
        assert_eq!(risks, ["High", "Medium", "Low"]);
    }

    #[test]
    fn structured_set_child_resolves_to_descendant_text() {
        let body = "<record><tags><tag>a</tag><tag>b</tag></tags><name>n</name></record>";
        let response = parse_response(body).unwrap();
        let fields = response.fields().unwrap();
        assert_eq!(fields.get("tags").map(String::as_str), Some("ab"));
        assert_eq!(fields.get("name").map(String::as_str), Some("n"));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result = parse_response("<alerts><alert></alerts>");
        assert!(matches!(result, Err(DecodeError::Malformed(_))));

        let result = parse_response("not xml at all");
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }
}
