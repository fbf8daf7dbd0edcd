//! The client capability seam: five remote listing calls and their errors.

use async_trait::async_trait;

use dirview_core::types::{
    ListIncomingTypedLinksRequest, ListIncomingTypedLinksResponse, ListObjectAttributesRequest,
    ListObjectAttributesResponse, ListObjectChildrenRequest, ListObjectChildrenResponse,
    ListObjectParentsRequest, ListObjectParentsResponse, ListOutgoingTypedLinksRequest,
    ListOutgoingTypedLinksResponse,
};

/// Errors from directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("transport error: {0}")]
    Transport(String),

    /// A failure the service itself returned (access denied, reference not
    /// found, throttling, invalid ARN, validation). Relayed without
    /// translation.
    #[error("{code}: {message}")]
    Service {
        code: String,
        message: String,
        status: u16,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DirectoryError {
    /// Service error code, if this is a service-side failure.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// The five remote listing calls a directory backend must provide.
///
/// This is the single integration seam: a test double only needs these five
/// signatures to fully exercise the accessor. Implementations must be safe
/// for concurrent use by multiple callers.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn list_object_attributes(
        &self,
        request: ListObjectAttributesRequest,
    ) -> Result<ListObjectAttributesResponse, DirectoryError>;

    async fn list_object_children(
        &self,
        request: ListObjectChildrenRequest,
    ) -> Result<ListObjectChildrenResponse, DirectoryError>;

    async fn list_object_parents(
        &self,
        request: ListObjectParentsRequest,
    ) -> Result<ListObjectParentsResponse, DirectoryError>;

    async fn list_incoming_typed_links(
        &self,
        request: ListIncomingTypedLinksRequest,
    ) -> Result<ListIncomingTypedLinksResponse, DirectoryError>;

    async fn list_outgoing_typed_links(
        &self,
        request: ListOutgoingTypedLinksRequest,
    ) -> Result<ListOutgoingTypedLinksResponse, DirectoryError>;
}
