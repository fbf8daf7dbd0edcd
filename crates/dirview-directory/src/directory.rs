//! The read-only directory accessor.

use std::sync::Arc;

use dirview_core::types::{
    ConsistencyLevel, ListIncomingTypedLinksRequest, ListIncomingTypedLinksResponse,
    ListObjectAttributesRequest, ListObjectAttributesResponse, ListObjectChildrenRequest,
    ListObjectChildrenResponse, ListObjectParentsRequest, ListObjectParentsResponse,
    ListOutgoingTypedLinksRequest, ListOutgoingTypedLinksResponse, ObjectReference,
};

use crate::client::{DirectoryClient, DirectoryError};

/// Read-only view over one directory/schema pair.
///
/// Every operation issues a single eventual-consistency request with the
/// object selector `$<id>` and relays the client's result verbatim: no retry,
/// no caching, no pagination beyond passing `next_token` through. The id is
/// not validated or escaped; ids containing selector-significant characters
/// surface as service-side errors.
///
/// Holds no mutable state — the client reference is shared, and concurrent
/// calls on one accessor are safe whenever the client itself is.
pub struct Directory {
    client: Arc<dyn DirectoryClient>,
    directory_arn: String,
    schema_arn: String,
}

impl Directory {
    /// Create an accessor for the given directory and applied schema.
    ///
    /// Neither ARN is validated here; a bad reference surfaces as a service
    /// error on the first query.
    pub fn new(
        client: Arc<dyn DirectoryClient>,
        directory_arn: impl Into<String>,
        schema_arn: impl Into<String>,
    ) -> Self {
        Self {
            client,
            directory_arn: directory_arn.into(),
            schema_arn: schema_arn.into(),
        }
    }

    /// ARN of the directory instance this accessor queries.
    pub fn directory_arn(&self) -> &str {
        &self.directory_arn
    }

    /// ARN of the schema the directory was created against. The listings do
    /// not send it; callers composing typed-link facets need it.
    pub fn schema_arn(&self) -> &str {
        &self.schema_arn
    }

    /// List an object's attributes.
    pub async fn list_object_attributes(
        &self,
        id: &str,
    ) -> Result<ListObjectAttributesResponse, DirectoryError> {
        let request = ListObjectAttributesRequest {
            directory_arn: self.directory_arn.clone(),
            consistency_level: ConsistencyLevel::Eventual,
            object_reference: ObjectReference::from_id(id),
            next_token: None,
            max_results: None,
        };
        tracing::debug!(selector = %request.object_reference.selector, "listing object attributes");
        self.client.list_object_attributes(request).await
    }

    /// List an object's children (child link name → object identifier).
    pub async fn list_object_children(
        &self,
        id: &str,
    ) -> Result<ListObjectChildrenResponse, DirectoryError> {
        let request = ListObjectChildrenRequest {
            directory_arn: self.directory_arn.clone(),
            consistency_level: ConsistencyLevel::Eventual,
            object_reference: ObjectReference::from_id(id),
            next_token: None,
            max_results: None,
        };
        tracing::debug!(selector = %request.object_reference.selector, "listing object children");
        self.client.list_object_children(request).await
    }

    /// List an object's parents.
    pub async fn list_object_parents(
        &self,
        id: &str,
    ) -> Result<ListObjectParentsResponse, DirectoryError> {
        let request = ListObjectParentsRequest {
            directory_arn: self.directory_arn.clone(),
            consistency_level: ConsistencyLevel::Eventual,
            object_reference: ObjectReference::from_id(id),
            next_token: None,
            max_results: None,
        };
        tracing::debug!(selector = %request.object_reference.selector, "listing object parents");
        self.client.list_object_parents(request).await
    }

    /// List the typed links pointing at an object.
    pub async fn list_incoming_typed_links(
        &self,
        id: &str,
    ) -> Result<ListIncomingTypedLinksResponse, DirectoryError> {
        let request = ListIncomingTypedLinksRequest {
            directory_arn: self.directory_arn.clone(),
            consistency_level: ConsistencyLevel::Eventual,
            object_reference: ObjectReference::from_id(id),
            next_token: None,
            max_results: None,
        };
        tracing::debug!(selector = %request.object_reference.selector, "listing incoming typed links");
        self.client.list_incoming_typed_links(request).await
    }

    /// List the typed links originating from an object.
    pub async fn list_outgoing_typed_links(
        &self,
        id: &str,
    ) -> Result<ListOutgoingTypedLinksResponse, DirectoryError> {
        let request = ListOutgoingTypedLinksRequest {
            directory_arn: self.directory_arn.clone(),
            consistency_level: ConsistencyLevel::Eventual,
            object_reference: ObjectReference::from_id(id),
            next_token: None,
            max_results: None,
        };
        tracing::debug!(selector = %request.object_reference.selector, "listing outgoing typed links");
        self.client.list_outgoing_typed_links(request).await
    }
}
