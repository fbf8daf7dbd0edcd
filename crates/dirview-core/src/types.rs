//! Wire types for the directory service's five listing operations.
//!
//! Member names follow the service's JSON protocol (PascalCase). Two members
//! never travel in a request body: the directory ARN is carried in the
//! `x-amz-data-partition` header on every call, and the consistency level is
//! carried in the `x-amz-consistency-level` header on the three object
//! listings (the typed-link listings take it as a body member).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ── Consistency ───────────────────────────────────────────────────

/// Read consistency requested from the directory service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsistencyLevel {
    /// Possibly-stale but eventually-converging view. Default for all reads.
    #[default]
    Eventual,
    /// Strongly consistent view.
    Serializable,
}

impl ConsistencyLevel {
    /// Wire token, as sent in the `x-amz-consistency-level` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eventual => "EVENTUAL",
            Self::Serializable => "SERIALIZABLE",
        }
    }
}

// ── Object References ─────────────────────────────────────────────

/// A token naming one node in the directory graph.
///
/// The selector form used here is `$<object identifier>`. The id is
/// interpolated verbatim: ids containing selector-significant characters are
/// not escaped and surface as service-side errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectReference {
    pub selector: String,
}

impl ObjectReference {
    /// Build a `$<id>` selector for a local object identifier.
    pub fn from_id(id: &str) -> Self {
        Self {
            selector: format!("${id}"),
        }
    }
}

// ── Attributes ────────────────────────────────────────────────────

/// Identifies one attribute: the schema it belongs to, its facet, its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeKey {
    pub schema_arn: String,
    pub facet_name: String,
    pub name: String,
}

/// An attribute value in one of the service's primitive encodings.
///
/// Externally tagged, matching the wire shape `{"StringValue": "…"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedAttributeValue {
    StringValue(String),
    /// Base64-encoded bytes.
    BinaryValue(String),
    BooleanValue(bool),
    /// The service transmits numbers as strings.
    NumberValue(String),
    /// ISO-8601 timestamp.
    DatetimeValue(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeKeyAndValue {
    pub key: AttributeKey,
    pub value: TypedAttributeValue,
}

/// Attribute addressed by bare name, used inside typed-link identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeNameAndValue {
    pub attribute_name: String,
    pub value: TypedAttributeValue,
}

// ── Typed Links ───────────────────────────────────────────────────

/// Names a typed-link facet within a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypedLinkSchemaAndFacetName {
    pub schema_arn: String,
    pub typed_link_name: String,
}

/// Fully identifies one typed link: facet, endpoints, identity attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypedLinkSpecifier {
    pub typed_link_facet: TypedLinkSchemaAndFacetName,
    pub source_object_reference: ObjectReference,
    pub target_object_reference: ObjectReference,
    pub identity_attribute_values: Vec<AttributeNameAndValue>,
}

// ── ListObjectAttributes ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectAttributesRequest {
    /// Header-carried; never serialized into the body.
    #[serde(skip_serializing, default)]
    pub directory_arn: String,
    /// Header-carried on object listings; never serialized into the body.
    #[serde(skip_serializing, default)]
    pub consistency_level: ConsistencyLevel,
    pub object_reference: ObjectReference,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectAttributesResponse {
    #[serde(default)]
    pub attributes: Vec<AttributeKeyAndValue>,
    /// Continuation token, relayed unconsumed. `Some` means more pages exist.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
}

// ── ListObjectChildren ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectChildrenRequest {
    #[serde(skip_serializing, default)]
    pub directory_arn: String,
    #[serde(skip_serializing, default)]
    pub consistency_level: ConsistencyLevel,
    pub object_reference: ObjectReference,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectChildrenResponse {
    /// Child link name → child object identifier.
    #[serde(default)]
    pub children: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
}

// ── ListObjectParents ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectParentsRequest {
    #[serde(skip_serializing, default)]
    pub directory_arn: String,
    #[serde(skip_serializing, default)]
    pub consistency_level: ConsistencyLevel,
    pub object_reference: ObjectReference,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_results: Option<u32>,
}

/// One parent edge: the parent object plus the link name under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectIdentifierAndLinkName {
    pub object_identifier: String,
    pub link_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectParentsResponse {
    #[serde(default)]
    pub parent_links: Vec<ObjectIdentifierAndLinkName>,
    /// Legacy map form (parent object identifier → link name) the service
    /// still returns alongside `parent_links`.
    #[serde(default)]
    pub parents: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
}

// ── ListIncomingTypedLinks / ListOutgoingTypedLinks ───────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIncomingTypedLinksRequest {
    #[serde(skip_serializing, default)]
    pub directory_arn: String,
    /// Body-carried on typed-link listings.
    pub consistency_level: ConsistencyLevel,
    pub object_reference: ObjectReference,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIncomingTypedLinksResponse {
    #[serde(default)]
    pub link_specifiers: Vec<TypedLinkSpecifier>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOutgoingTypedLinksRequest {
    #[serde(skip_serializing, default)]
    pub directory_arn: String,
    pub consistency_level: ConsistencyLevel,
    pub object_reference: ObjectReference,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOutgoingTypedLinksResponse {
    #[serde(default)]
    pub typed_link_specifiers: Vec<TypedLinkSpecifier>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_form() {
        assert_eq!(ObjectReference::from_id("42").selector, "$42");
        assert_eq!(ObjectReference::from_id("").selector, "$");
        // No escaping: the id is interpolated verbatim.
        assert_eq!(ObjectReference::from_id("$weird").selector, "$$weird");
    }

    #[test]
    fn test_consistency_level_wire_tokens() {
        assert_eq!(ConsistencyLevel::Eventual.as_str(), "EVENTUAL");
        assert_eq!(ConsistencyLevel::Serializable.as_str(), "SERIALIZABLE");
        assert_eq!(
            serde_json::to_string(&ConsistencyLevel::Eventual).unwrap(),
            "\"EVENTUAL\""
        );
    }

    #[test]
    fn test_object_request_body_omits_header_members() {
        let req = ListObjectChildrenRequest {
            directory_arn: "arn:aws:clouddirectory:dir1".to_string(),
            consistency_level: ConsistencyLevel::Eventual,
            object_reference: ObjectReference::from_id("42"),
            next_token: None,
            max_results: None,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["ObjectReference"]["Selector"], "$42");
        assert!(body.get("DirectoryArn").is_none());
        assert!(body.get("ConsistencyLevel").is_none());
        assert!(body.get("NextToken").is_none());
    }

    #[test]
    fn test_typed_link_request_body_carries_consistency() {
        let req = ListIncomingTypedLinksRequest {
            directory_arn: "arn:aws:clouddirectory:dir1".to_string(),
            consistency_level: ConsistencyLevel::Eventual,
            object_reference: ObjectReference::from_id("42"),
            next_token: None,
            max_results: None,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["ConsistencyLevel"], "EVENTUAL");
        assert!(body.get("DirectoryArn").is_none());
    }

    #[test]
    fn test_children_response_decodes_wire_shape() {
        let resp: ListObjectChildrenResponse = serde_json::from_str(
            r#"{"Children":{"a":"id-a","b":"id-b"},"NextToken":"tok"}"#,
        )
        .unwrap();
        assert_eq!(resp.children.len(), 2);
        assert_eq!(resp.children["a"], "id-a");
        assert_eq!(resp.next_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_attribute_value_is_externally_tagged() {
        let v = TypedAttributeValue::StringValue("web-01".to_string());
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"StringValue":"web-01"}"#
        );
        let back: TypedAttributeValue =
            serde_json::from_str(r#"{"BooleanValue":true}"#).unwrap();
        assert_eq!(back, TypedAttributeValue::BooleanValue(true));
    }

    #[test]
    fn test_parents_response_defaults_when_fields_absent() {
        let resp: ListObjectParentsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.parent_links.is_empty());
        assert!(resp.parents.is_empty());
        assert!(resp.next_token.is_none());
    }
}
