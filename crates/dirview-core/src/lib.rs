//! dirview-core: Shared wire types and configuration for the dirview accessor.
//!
//! This crate provides the foundational types used across all dirview components:
//! - Request/response types for the five directory listing operations
//! - Object references and the `$<id>` selector convention
//! - Attribute and typed-link value types
//! - Configuration for reaching a directory instance

pub mod config;
pub mod types;

pub use config::DirectoryConfig;
pub use types::{
    AttributeKey, AttributeKeyAndValue, AttributeNameAndValue, ConsistencyLevel,
    ListIncomingTypedLinksRequest, ListIncomingTypedLinksResponse, ListObjectAttributesRequest,
    ListObjectAttributesResponse, ListObjectChildrenRequest, ListObjectChildrenResponse,
    ListObjectParentsRequest, ListObjectParentsResponse, ListOutgoingTypedLinksRequest,
    ListOutgoingTypedLinksResponse, ObjectIdentifierAndLinkName, ObjectReference,
    TypedAttributeValue, TypedLinkSchemaAndFacetName, TypedLinkSpecifier,
};
